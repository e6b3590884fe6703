// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{bail, Context, Result};
use application::{NoteRepository, SettingsRepository, ViewRouter};
use cli::args::{Args, Command, SettingsCommand};
use domain::{Route, View};
use infrastructure::{JsonNoteStore, JsonSettingsStore, PageRenderer};
use ports::HtmlPresenter;
use std::path::Path;
use tracing::{debug, info};
use util::text::{extract_first_line, truncate_chars};

const LIST_TITLE_WIDTH: usize = 40;
const LIST_LINE_WIDTH: usize = 60;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notaview with arguments");

    let mut router = open_router(&args.dir);

    match args.command {
        Command::View {
            route,
            json,
            search,
            show_delete,
        } => {
            let entered = router.navigate(&route);
            if entered.to_string() != route {
                info!(requested = %route, %entered, "Route redirected");
            }
            router.search(search);
            if show_delete {
                router.toggle_delete();
            }
            let view = router.render();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                open_view(&view)?;
            }
        }
        Command::List { search } => {
            for (index, note) in router.book().list_notes(search.as_deref()) {
                println!(
                    "{}\t{}\t{}",
                    index,
                    truncate_chars(note.display_title(), LIST_TITLE_WIDTH),
                    truncate_chars(&extract_first_line(note.body_text()), LIST_LINE_WIDTH)
                );
            }
        }
        Command::Create { title, body } => {
            router.go(Route::Create);
            fill_draft(&mut router, title, body);
            router.submit().context("Failed to save note")?;
            let index = router.book().len().saturating_sub(1);
            println!("Created note {index}");
        }
        Command::Edit { index, title, body } => {
            if router.go(Route::Edit(index)) != Route::Edit(index) {
                bail!("No note at index {index}");
            }
            fill_draft(&mut router, title, body);
            router.submit().context("Failed to save note")?;
            println!("Updated note {index}");
        }
        Command::Delete { index } => {
            match router.delete(index).context("Failed to save notes")? {
                Some(note) => println!("Deleted note {index}: {}", note.display_title()),
                None => bail!("No note at index {index}"),
            }
        }
        Command::Settings { action } => {
            if let Some(action) = action {
                apply_settings(&mut router, action).context("Failed to save settings")?;
            }
            println!("{}", serde_json::to_string_pretty(router.settings())?);
        }
    }

    Ok(())
}

/// Router over the two JSON files in `data_dir`.
pub fn open_router(data_dir: &Path) -> ViewRouter<JsonNoteStore, JsonSettingsStore> {
    debug!(data_dir = %data_dir.display(), "Opening stores");
    ViewRouter::new(JsonNoteStore::new(data_dir), JsonSettingsStore::new(data_dir))
}

fn fill_draft<R: NoteRepository, S: SettingsRepository>(
    router: &mut ViewRouter<R, S>,
    title: Option<String>,
    body: Option<String>,
) {
    if let Some(title) = title {
        router.set_title(title);
    }
    if let Some(body) = body {
        router.set_body(body);
    }
}

fn apply_settings<R: NoteRepository, S: SettingsRepository>(
    router: &mut ViewRouter<R, S>,
    action: SettingsCommand,
) -> Result<()> {
    match action {
        SettingsCommand::Theme { name } => router.change_theme(name)?,
        SettingsCommand::FontSize { size } => router.change_font_size(size)?,
        SettingsCommand::Preview { enabled } => router.set_preview(enabled)?,
        SettingsCommand::Radius { value } => {
            router.change_radius(&value)?;
        }
        SettingsCommand::ResetRadius => router.reset_radius()?,
        SettingsCommand::EditorPreview => {
            router.toggle_editor_preview()?;
        }
    }
    Ok(())
}

fn open_view(view: &View) -> Result<()> {
    let presenter = HtmlPresenter::new();
    let mut renderer = PageRenderer::new();

    let html = presenter.render(view);
    let path = renderer.create_temp_file(&HtmlPresenter::page_name(view), &html)?;
    info!(route = view.route(), path = %path.display(), "Opening view");
    renderer.open_in_browser(&path)
}
