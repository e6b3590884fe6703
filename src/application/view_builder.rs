// src/application/view_builder.rs
//
// Each builder reads current state and returns a complete view. Nothing is
// carried over from a previously built view.
use crate::application::EditorDraft;
use crate::constants::RADIUS_OPTIONS;
use crate::domain::theme::ThemeName;
use crate::domain::view::{EditorView, HomeView, SettingsView, Tile};
use crate::domain::{Note, Route, Settings};

/// Transient state of the home screen. Not persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub show_delete: bool,
    pub menu_expanded: bool,
    pub search: Option<String>,
}

/// Hints shown on the settings screen once the theme or radius changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Notices {
    pub theme: bool,
    pub radius: bool,
}

pub fn build_tile(index: usize, note: &Note, settings: &Settings) -> Tile {
    let palette = settings.palette();
    Tile {
        index,
        edit_route: Route::Edit(index).to_string(),
        title: note.display_title().to_string(),
        excerpt: settings.preview.then(|| note.body_text().to_string()),
        gradient: [
            note.color.clone().unwrap_or_else(|| palette.bg.to_string()),
            note.color2.clone().unwrap_or_else(|| palette.bg2.to_string()),
        ],
    }
}

pub fn build_home<'a>(
    notes: impl Iterator<Item = (usize, &'a Note)>,
    settings: &Settings,
    state: &HomeState,
) -> HomeView {
    HomeView {
        route: Route::Home.to_string(),
        palette: settings.palette(),
        sizing: settings.sizing(),
        tiles: notes
            .map(|(index, note)| build_tile(index, note, settings))
            .collect(),
        show_delete: state.show_delete,
        menu_expanded: state.menu_expanded,
        search: state.search.clone(),
    }
}

pub fn build_settings(settings: &Settings, notices: Notices) -> SettingsView {
    SettingsView {
        route: Route::Settings.to_string(),
        palette: settings.palette(),
        sizing: settings.sizing(),
        theme: settings.theme.clone(),
        themes: ThemeName::ALL.iter().map(|t| t.as_str()).collect(),
        font_size: settings.font_size.as_str(),
        font_sizes: SettingsView::font_size_options(),
        preview: settings.preview,
        radius: settings.bradius,
        radius_options: RADIUS_OPTIONS.to_vec(),
        theme_notice: notices.theme,
        radius_notice: notices.radius,
    }
}

pub fn build_editor(route: Route, draft: &EditorDraft, settings: &Settings) -> EditorView {
    EditorView {
        route: route.to_string(),
        palette: settings.palette(),
        sizing: settings.sizing(),
        mode: draft.mode,
        title: draft.title.clone(),
        body: draft.body.clone(),
        colors: [draft.color.clone(), draft.color2.clone()],
        text_tone: draft.text_tone(),
        preview: draft.show_markdown,
    }
}
