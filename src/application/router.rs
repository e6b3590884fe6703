// src/application/router.rs
use crate::application::view_builder::{self, HomeState, Notices};
use crate::application::{
    EditorDraft, NoteBook, NoteRepository, SettingsEditor, SettingsRepository,
};
use crate::domain::view::EditorMode;
use crate::domain::{DomainError, FontSize, Note, Route, Settings, ThemeName, View};
use tracing::{debug, info, instrument};

/// User input that drives the router.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(String),
    SetTitle(String),
    SetBody(String),
    Submit,
    Delete(usize),
    ToggleDelete,
    ToggleMenu,
    Search(Option<String>),
    ChangeTheme(ThemeName),
    ChangeFontSize(FontSize),
    SetPreview(bool),
    ChangeRadius(String),
    ResetRadius,
    ToggleEditorPreview,
}

/// Application state and the screen state machine.
///
/// Holds the note list, the settings, the current route and the transient
/// view flags. `render` builds the whole view for the current route from that
/// state every time it is called.
pub struct ViewRouter<R: NoteRepository, S: SettingsRepository> {
    book: NoteBook<R>,
    settings: SettingsEditor<S>,
    route: Route,
    draft: Option<EditorDraft>,
    home: HomeState,
    notices: Notices,
}

impl<R: NoteRepository, S: SettingsRepository> ViewRouter<R, S> {
    /// Load both stores and start on the home screen.
    pub fn new(notes: R, settings: S) -> Self {
        Self {
            book: NoteBook::open(notes),
            settings: SettingsEditor::open(settings),
            route: Route::Home,
            draft: None,
            home: HomeState::default(),
            notices: Notices::default(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn book(&self) -> &NoteBook<R> {
        &self.book
    }

    pub fn settings(&self) -> &Settings {
        self.settings.settings()
    }

    pub fn draft(&self) -> Option<&EditorDraft> {
        self.draft.as_ref()
    }

    pub fn home_state(&self) -> &HomeState {
        &self.home
    }

    /// Navigate to a route string. Routes that do not parse, and edit routes
    /// whose index has no note, land on the home screen.
    #[instrument(level = "debug", skip(self))]
    pub fn navigate(&mut self, route: &str) -> Route {
        match route.parse::<Route>() {
            Ok(parsed) => self.go(parsed),
            Err(e) => {
                debug!(error = %e, "Redirecting to home");
                self.go(Route::Home)
            }
        }
    }

    /// Switch to `route` and reset per-screen state. Returns the route that
    /// was actually entered.
    pub fn go(&mut self, route: Route) -> Route {
        let resolved = match route {
            Route::Edit(index) if index >= self.book.len() => {
                debug!(index, len = self.book.len(), "Edit index out of range, redirecting to home");
                Route::Home
            }
            other => other,
        };

        let palette = self.settings().palette();
        self.draft = match resolved {
            Route::Create => Some(EditorDraft::blank(&palette)),
            Route::Edit(index) => self
                .book
                .get(index)
                .map(|note| EditorDraft::from_note(index, note, &palette)),
            Route::Home | Route::Settings => None,
        };
        self.home.show_delete = false;
        self.route = resolved;
        debug!(route = %resolved, "Entered route");
        resolved
    }

    pub fn render(&self) -> View {
        let settings = self.settings();
        match (self.route, &self.draft) {
            (Route::Settings, _) => View::Settings(view_builder::build_settings(settings, self.notices)),
            (Route::Create | Route::Edit(_), Some(draft)) => {
                View::Editor(view_builder::build_editor(self.route, draft, settings))
            }
            _ => View::Home(view_builder::build_home(
                self.book.list_notes(self.home.search.as_deref()),
                settings,
                &self.home,
            )),
        }
    }

    /// Apply one action and return the rebuilt view.
    pub fn dispatch(&mut self, action: Action) -> Result<View, DomainError> {
        debug!(?action, "Dispatching");
        match action {
            Action::Navigate(route) => {
                self.navigate(&route);
            }
            Action::SetTitle(title) => self.set_title(title),
            Action::SetBody(body) => self.set_body(body),
            Action::Submit => {
                self.submit()?;
            }
            Action::Delete(index) => {
                self.delete(index)?;
            }
            Action::ToggleDelete => {
                self.toggle_delete();
            }
            Action::ToggleMenu => {
                self.toggle_menu();
            }
            Action::Search(query) => self.search(query),
            Action::ChangeTheme(theme) => self.change_theme(theme)?,
            Action::ChangeFontSize(size) => self.change_font_size(size)?,
            Action::SetPreview(preview) => self.set_preview(preview)?,
            Action::ChangeRadius(value) => {
                self.change_radius(&value)?;
            }
            Action::ResetRadius => self.reset_radius()?,
            Action::ToggleEditorPreview => {
                self.toggle_editor_preview()?;
            }
        }
        Ok(self.render())
    }

    pub fn set_title(&mut self, title: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = title;
        }
    }

    pub fn set_body(&mut self, body: String) {
        if let Some(draft) = self.draft.as_mut() {
            draft.body = body;
        }
    }

    /// Write the editor draft back and return home.
    ///
    /// A create draft is appended and an edit draft replaces its note. If the
    /// edited index no longer exists nothing is written and the editor stays
    /// open. Outside the editor this does nothing.
    #[instrument(level = "debug", skip(self))]
    pub fn submit(&mut self) -> Result<Route, DomainError> {
        let Some(draft) = &self.draft else {
            return Ok(self.route);
        };
        let mode = draft.mode;
        let note = draft.to_note();

        match mode {
            EditorMode::Create => {
                self.book.append(note)?;
            }
            EditorMode::Edit { index } => match self.book.replace(index, note) {
                Ok(()) => {}
                Err(DomainError::NoteNotFound(_)) => {
                    debug!(index, "Edited note no longer exists, ignoring submit");
                    return Ok(self.route);
                }
                Err(e) => return Err(e),
            },
        }
        Ok(self.go(Route::Home))
    }

    /// Delete the note at `index`. An index with no note is ignored and
    /// yields `None`.
    pub fn delete(&mut self, index: usize) -> Result<Option<Note>, DomainError> {
        let removed = match self.book.remove(index) {
            Ok(note) => Some(note),
            Err(DomainError::NoteNotFound(_)) => None,
            Err(e) => return Err(e),
        };
        self.home.show_delete = false;
        Ok(removed)
    }

    /// Show or hide the delete affordance on every tile.
    pub fn toggle_delete(&mut self) -> bool {
        self.home.show_delete = !self.home.show_delete;
        self.home.show_delete
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.home.menu_expanded = !self.home.menu_expanded;
        self.home.show_delete = false;
        self.home.menu_expanded
    }

    pub fn search(&mut self, query: Option<String>) {
        self.home.search = query.filter(|q| !q.is_empty());
    }

    pub fn change_theme(&mut self, theme: ThemeName) -> Result<(), DomainError> {
        self.settings.change_theme(theme)?;
        self.notices.theme = true;
        self.home.show_delete = false;
        Ok(())
    }

    pub fn change_font_size(&mut self, size: FontSize) -> Result<(), DomainError> {
        self.settings.change_font_size(size)?;
        self.home.show_delete = false;
        Ok(())
    }

    pub fn set_preview(&mut self, preview: bool) -> Result<(), DomainError> {
        self.settings.set_preview(preview)?;
        self.home.show_delete = false;
        Ok(())
    }

    pub fn change_radius(&mut self, value: &str) -> Result<f64, DomainError> {
        let radius = self.settings.change_radius(value)?;
        self.notices.radius = true;
        self.home.show_delete = false;
        Ok(radius)
    }

    pub fn reset_radius(&mut self) -> Result<(), DomainError> {
        self.settings.reset_radius()?;
        self.notices.radius = true;
        self.home.show_delete = false;
        Ok(())
    }

    /// Flip the stored editor preview flag and show the body to match it.
    ///
    /// The editor always opens on the raw input, so with the flag already set
    /// the first toggle clears it and the body stays raw.
    pub fn toggle_editor_preview(&mut self) -> Result<bool, DomainError> {
        let preview = self.settings.toggle_editor_preview()?;
        if let Some(draft) = self.draft.as_mut() {
            draft.show_markdown = preview;
        }
        info!(preview, "Editor preview toggled");
        Ok(preview)
    }
}
