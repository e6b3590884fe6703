// src/domain/view.rs
//
// Declarative description of a screen. The router builds one of these from
// scratch on every navigation; presenters turn it into HTML or JSON.
use crate::domain::{FontSize, Palette, Sizing, TextTone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Home(HomeView),
    Settings(SettingsView),
    Editor(EditorView),
}

impl View {
    pub fn route(&self) -> &str {
        match self {
            View::Home(v) => &v.route,
            View::Settings(v) => &v.route,
            View::Editor(v) => &v.route,
        }
    }

    pub fn palette(&self) -> &Palette {
        match self {
            View::Home(v) => &v.palette,
            View::Settings(v) => &v.palette,
            View::Editor(v) => &v.palette,
        }
    }

    pub fn sizing(&self) -> &Sizing {
        match self {
            View::Home(v) => &v.sizing,
            View::Settings(v) => &v.sizing,
            View::Editor(v) => &v.sizing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub route: String,
    pub palette: Palette,
    pub sizing: Sizing,
    pub tiles: Vec<Tile>,
    /// Delete affordances are visible on every tile at once, or on none.
    pub show_delete: bool,
    pub menu_expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// One note on the home grid, keyed by its position in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub index: usize,
    pub edit_route: String,
    pub title: String,
    /// Body text, only when tile previews are enabled.
    pub excerpt: Option<String>,
    pub gradient: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsView {
    pub route: String,
    pub palette: Palette,
    pub sizing: Sizing,
    pub theme: String,
    pub themes: Vec<&'static str>,
    pub font_size: &'static str,
    pub font_sizes: Vec<&'static str>,
    pub preview: bool,
    pub radius: f64,
    pub radius_options: Vec<&'static str>,
    /// "Restart to apply" hints shown after the theme or radius changed.
    pub theme_notice: bool,
    pub radius_notice: bool,
}

impl SettingsView {
    pub fn font_size_options() -> Vec<&'static str> {
        FontSize::ALL.iter().map(|size| size.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditorMode {
    Create,
    Edit { index: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub route: String,
    pub palette: Palette,
    pub sizing: Sizing,
    pub mode: EditorMode,
    pub title: String,
    pub body: String,
    pub colors: [String; 2],
    pub text_tone: TextTone,
    /// Show the body as rendered Markdown instead of the raw text input.
    pub preview: bool,
}
