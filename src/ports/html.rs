// src/ports/html.rs
use crate::domain::view::{EditorMode, EditorView, HomeView, SettingsView, Tile};
use crate::domain::{Palette, View};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use tracing::{debug, instrument};

lazy_static! {
    static ref HEX_COLOR_REGEX: Regex =
        Regex::new(r"^#?[0-9A-Fa-f]{3,8}$").expect("Failed to compile hex color regex");
}

/// A stored color as a CSS hex color, or `fallback` if it is anything else.
fn css_color(value: &str, fallback: &str) -> String {
    if HEX_COLOR_REGEX.is_match(value) {
        format!("#{}", value.trim_start_matches('#'))
    } else {
        debug!(color = value, fallback, "Not a hex color, using theme color");
        fallback.to_string()
    }
}

/// Renders a view as a standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Short name for the page file, derived from the view.
    pub fn page_name(view: &View) -> String {
        match view {
            View::Home(_) => "home".to_string(),
            View::Settings(_) => "settings".to_string(),
            View::Editor(editor) => match editor.mode {
                EditorMode::Create => "form".to_string(),
                EditorMode::Edit { index } => format!("edit-{index}"),
            },
        }
    }

    #[instrument(level = "debug", skip(self, view), fields(route = view.route()))]
    pub fn render(&self, view: &View) -> String {
        let body = match view {
            View::Home(home) => self.render_home(home),
            View::Settings(settings) => self.render_settings(settings),
            View::Editor(editor) => self.render_editor(editor),
        };
        self.page(view, &body)
    }

    /// Markdown body as HTML.
    pub fn render_markdown(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }

    fn page(&self, view: &View, body: &str) -> String {
        let palette = view.palette();
        let sizing = view.sizing();
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Notes {route}</title>
    <style>
        :root {{
            --bg: {bg};
            --bg2: {bg2};
            --text: {fg};
            --a1: {a1};
            --a2: {a2};
            --radius: {radius}px;
            --title-size: {title_size}px;
            --body-size: {body_size}px;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            margin: 0;
            padding: 12px;
            min-height: 100vh;
            box-sizing: border-box;
            background-color: var(--bg);
            color: var(--text);
        }}
        a {{
            color: inherit;
            text-decoration: none;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 220px));
            gap: 10px;
            padding: 10px;
        }}
        .tile {{
            display: flex;
            flex-direction: column;
            min-height: 50px;
            padding: 10px;
            border: 1px solid var(--a2);
            border-radius: var(--radius);
        }}
        .tile h3 {{
            margin: 0;
            font-size: var(--title-size);
        }}
        .tile p {{
            margin: 0.5em 0 0;
            font-size: var(--body-size);
            font-weight: bold;
            white-space: pre-wrap;
        }}
        .delete {{
            margin-bottom: 8px;
            padding: 4px;
            background: var(--a1);
            border: 1px solid var(--a2);
            border-radius: var(--radius);
            color: red;
        }}
        .bar {{
            display: flex;
            align-items: center;
            justify-content: space-between;
            height: 60px;
        }}
        .menu {{
            display: flex;
            gap: 12px;
            align-items: center;
            padding: 0 12px;
            height: 35px;
            background: var(--bg2);
            border-radius: var(--radius);
        }}
        .menu.expanded {{
            height: 70px;
            width: 250px;
            box-shadow: 0 0 3px 1px var(--a2);
        }}
        .panel {{
            padding: 10px;
            background: var(--a2);
            border: 1px solid var(--a1);
            border-radius: var(--radius);
        }}
        .row {{
            display: flex;
            justify-content: space-between;
            align-items: center;
            font-size: 18px;
            padding: 8px 0;
            border-bottom: 1px solid var(--text);
        }}
        .notice {{
            font-size: 12px;
        }}
        .editor {{
            display: flex;
            flex-direction: column;
            gap: 12px;
            margin-top: 11px;
            padding: 5px;
            min-height: 80vh;
            border-radius: var(--radius);
        }}
        .editor input, .editor textarea {{
            background: transparent;
            border: 0;
            color: inherit;
            font: inherit;
        }}
        .editor input {{
            font-size: 25px;
        }}
        .editor textarea {{
            flex: 1;
            font-size: 18px;
            resize: none;
        }}
    </style>
</head>
<body data-route="{route}">
{body}
</body>
</html>"#,
            route = attr(view.route()),
            bg = palette.bg,
            bg2 = palette.bg2,
            fg = palette.text,
            a1 = palette.a1,
            a2 = palette.a2,
            radius = sizing.radius,
            title_size = sizing.title,
            body_size = sizing.body,
            body = body,
        )
    }

    fn render_tile(&self, tile: &Tile, show_delete: bool, palette: &Palette) -> String {
        let delete = if show_delete {
            format!(
                r#"<button class="delete" data-delete="{index}">Delete</button>"#,
                index = tile.index
            )
        } else {
            String::new()
        };
        let excerpt = tile
            .excerpt
            .as_deref()
            .map(|excerpt| format!("<p>{}</p>", text(excerpt)))
            .unwrap_or_default();

        format!(
            r#"<div class="tile" data-index="{index}" style="background: linear-gradient(to bottom, {from}, {to});">
    {delete}
    <a href="{href}"><h3>{title}</h3>{excerpt}</a>
</div>"#,
            index = tile.index,
            from = css_color(&tile.gradient[0], palette.bg),
            to = css_color(&tile.gradient[1], palette.bg2),
            delete = delete,
            href = attr(&tile.edit_route),
            title = text(&tile.title),
            excerpt = excerpt,
        )
    }

    fn render_home(&self, home: &HomeView) -> String {
        let tiles: Vec<String> = home
            .tiles
            .iter()
            .map(|tile| self.render_tile(tile, home.show_delete, &home.palette))
            .collect();
        let search = home
            .search
            .as_deref()
            .map(|query| format!(r#"<div class="notice">Search: {}</div>"#, text(query)))
            .unwrap_or_default();
        let menu_class = if home.menu_expanded { "menu expanded" } else { "menu" };

        format!(
            r#"<h1>Notes</h1>
{search}
<hr>
<div class="grid">
{tiles}
</div>
<div class="bar">
    <nav class="{menu_class}"><span>&#9776;</span><a href="/settings">Settings</a></nav>
    <a href="/form">New note</a>
</div>"#,
            search = search,
            tiles = tiles.join("\n"),
            menu_class = menu_class,
        )
    }

    fn render_settings(&self, settings: &SettingsView) -> String {
        let options = |choices: &[&str], selected: &str| -> String {
            choices
                .iter()
                .map(|choice| {
                    let marker = if *choice == selected { " selected" } else { "" };
                    format!(r#"<option{marker}>{}</option>"#, text(choice))
                })
                .collect::<Vec<_>>()
                .join("")
        };
        let radius = settings.radius.to_string();
        let notice = |shown: bool, message: &str| -> String {
            if shown {
                format!(r#"<div class="notice">{message}</div>"#)
            } else {
                String::new()
            }
        };

        format!(
            r#"<header class="bar"><a href="/">&#8249; Back</a><h2>Settings</h2></header>
<section class="panel">
    <div class="row"><span>Theme</span><select name="theme">{themes}</select></div>
    {theme_notice}
    <div class="row"><span>Font size</span><select name="font_size">{sizes}</select></div>
    <div class="row"><span>Preview</span><input type="checkbox" name="preview"{preview}></div>
    <div class="row"><span>Corner radius</span><select name="bradius">{radii}</select><span>{radius}</span></div>
    {radius_notice}
</section>"#,
            themes = options(&settings.themes[..], settings.theme.as_str()),
            theme_notice = notice(settings.theme_notice, "Restart the app to apply the theme"),
            sizes = options(&settings.font_sizes[..], settings.font_size),
            preview = if settings.preview { " checked" } else { "" },
            radii = options(&settings.radius_options[..], radius.as_str()),
            radius = text(&radius),
            radius_notice = notice(
                settings.radius_notice,
                "Restart the app to apply the corner radius"
            ),
        )
    }

    fn render_editor(&self, editor: &EditorView) -> String {
        let body = if editor.preview {
            format!(
                r#"<article class="markdown">{}</article>"#,
                self.render_markdown(&editor.body)
            )
        } else {
            format!(
                r#"<textarea name="text">{}</textarea>"#,
                text(&editor.body)
            )
        };

        format!(
            r#"<form class="editor" style="background: linear-gradient(to bottom, {from}, {to}); color: {tone}; border: 1px solid {from}; box-shadow: 0 0 3px 1px {from};">
    <input name="nombre" placeholder="Título" value="{title}">
    <hr>
    {body}
    <div class="bar"><a href="/">&#10005;</a><button type="submit">&#10003;</button></div>
</form>"#,
            from = css_color(&editor.colors[0], editor.palette.bg),
            to = css_color(&editor.colors[1], editor.palette.bg2),
            tone = editor.text_tone.css(),
            title = attr(&editor.title),
            body = body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::view_builder::{build_editor, build_home, build_settings, HomeState, Notices};
    use crate::application::EditorDraft;
    use crate::domain::{Note, Route, Settings};
    use rstest::rstest;

    fn home_view(notes: &[Note], state: &HomeState) -> View {
        View::Home(build_home(
            notes.iter().enumerate(),
            &Settings::default(),
            state,
        ))
    }

    #[test]
    fn given_note_with_markup_when_rendering_home_then_escapes_title_and_body() {
        // Arrange
        let notes = vec![Note::new("<b>bold</b>", "a & b", "#000000", "#111111", false)];
        let view = home_view(&notes, &HomeState::default());

        // Act
        let html = HtmlPresenter::new().render(&view);

        // Assert
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains(r#"href="/edit/0""#));
        assert!(html.contains("linear-gradient(to bottom, #000000, #111111)"));
    }

    #[rstest]
    #[case("red);background:url(https://example.com/x)", "#121828")]
    #[case("#FFF\" onmouseover=\"x", "#121828")]
    #[case("FFFFFF", "#FFFFFF")]
    #[case("#12345678", "#12345678")]
    fn given_stored_color_when_rendering_tile_then_only_hex_colors_reach_style(
        #[case] stored: &str,
        #[case] expected: &str,
    ) {
        let notes = vec![Note::new("a", "", stored, "#000000", false)];

        let html = HtmlPresenter::new().render(&home_view(&notes, &HomeState::default()));

        assert!(html.contains(&format!("linear-gradient(to bottom, {expected}, #000000)")));
        assert!(!html.contains("url("));
        assert!(!html.contains("onmouseover"));
    }

    #[test]
    fn given_invalid_note_color_when_rendering_editor_then_falls_back_to_theme() {
        let settings = Settings::default();
        let mut draft = EditorDraft::blank(&settings.palette());
        draft.color = "red;position:fixed".to_string();
        let view = View::Editor(build_editor(Route::Create, &draft, &settings));

        let html = HtmlPresenter::new().render(&view);

        assert!(html.contains("linear-gradient(to bottom, #121828, #1E293B)"));
        assert!(!html.contains("position:fixed"));
    }

    #[rstest]
    #[case(false, 0)]
    #[case(true, 2)]
    fn given_delete_toggle_when_rendering_home_then_all_or_no_tiles_have_delete(
        #[case] show_delete: bool,
        #[case] expected: usize,
    ) {
        let notes = vec![
            Note::new("a", "", "#000000", "#000000", false),
            Note::new("b", "", "#000000", "#000000", false),
        ];
        let state = HomeState {
            show_delete,
            ..HomeState::default()
        };

        let html = HtmlPresenter::new().render(&home_view(&notes, &state));

        assert_eq!(html.matches("data-delete=").count(), expected);
    }

    #[test]
    fn given_preview_on_when_rendering_editor_then_body_is_markdown() {
        // Arrange
        let settings = Settings::default();
        let mut draft = EditorDraft::blank(&settings.palette());
        draft.body = "# Heading\n\n*item*".to_string();
        draft.show_markdown = true;
        let view = View::Editor(build_editor(Route::Create, &draft, &settings));

        // Act
        let html = HtmlPresenter::new().render(&view);

        // Assert
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("<em>item</em>"));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn given_preview_off_when_rendering_editor_then_body_is_raw_text() {
        let settings = Settings::default();
        let mut draft = EditorDraft::blank(&settings.palette());
        draft.body = "# Heading".to_string();
        let view = View::Editor(build_editor(Route::Create, &draft, &settings));

        let html = HtmlPresenter::new().render(&view);

        assert!(html.contains(r#"<textarea name="text"># Heading</textarea>"#));
    }

    #[test]
    fn given_light_note_color_when_rendering_editor_then_text_is_dark() {
        let settings = Settings::default();
        let mut draft = EditorDraft::blank(&settings.palette());
        draft.color = "#FFFFFF".to_string();
        let view = View::Editor(build_editor(Route::Create, &draft, &settings));

        let html = HtmlPresenter::new().render(&view);

        assert!(html.contains("color: #000000;"));
    }

    #[test]
    fn given_notices_when_rendering_settings_then_shows_hints_and_selection() {
        // Arrange
        let settings = Settings::default();
        let view = View::Settings(build_settings(
            &settings,
            Notices {
                theme: true,
                radius: false,
            },
        ));

        // Act
        let html = HtmlPresenter::new().render(&view);

        // Assert
        assert!(html.contains("Restart the app to apply the theme"));
        assert!(!html.contains("apply the corner radius"));
        assert!(html.contains("<option selected>Pro</option>"));
        assert!(html.contains("<option selected>20</option>"));
        assert!(html.contains("--radius: 20px;"));
    }

    #[rstest]
    #[case(Route::Create, "form")]
    #[case(Route::Edit(3), "edit-3")]
    fn given_editor_view_when_naming_page_then_reflects_mode(
        #[case] route: Route,
        #[case] expected: &str,
    ) {
        let settings = Settings::default();
        let mut draft = EditorDraft::blank(&settings.palette());
        if let Route::Edit(index) = route {
            draft.mode = EditorMode::Edit { index };
        }
        let view = View::Editor(build_editor(route, &draft, &settings));

        assert_eq!(HtmlPresenter::page_name(&view), expected);
    }
}
