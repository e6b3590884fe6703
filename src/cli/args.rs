// src/cli/args.rs
use crate::domain::{FontSize, ThemeName};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding contenedores.json and settings.json
    #[arg(short, long, value_name = "DIR", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a screen in the browser: /, /settings, /form or /edit/<INDEX>
    View {
        /// Route to render
        #[arg(value_name = "ROUTE", default_value = "/")]
        route: String,

        /// Print the view as JSON instead of opening the browser
        #[arg(long)]
        json: bool,

        /// Only show notes whose title or body contains this text
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,

        /// Show the delete control on every note
        #[arg(long)]
        show_delete: bool,
    },

    /// List notes with index, title and first line of the body
    List {
        /// Optional text to filter notes by title or body
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Create a note
    Create {
        /// Note title (empty becomes "Sin nombre")
        #[arg(short, long)]
        title: Option<String>,

        /// Note body, Markdown allowed
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Edit the note at an index; fields not given are kept
    Edit {
        #[arg(value_name = "INDEX")]
        index: usize,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        body: Option<String>,
    },

    /// Delete the note at an index; later notes move up by one
    Delete {
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Show settings, or change one
    Settings {
        #[command(subcommand)]
        action: Option<SettingsCommand>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommand {
    /// Color theme: Pro, Tec, Pastel, Elegante or Golden
    Theme {
        #[arg(value_name = "NAME")]
        name: ThemeName,
    },

    /// Font size step: 1, 2 or 3
    FontSize {
        #[arg(value_name = "SIZE")]
        size: FontSize,
    },

    /// Show note bodies on the home screen
    Preview {
        #[arg(value_name = "ENABLED", action = clap::ArgAction::Set)]
        enabled: bool,
    },

    /// Corner radius; values that are not numbers reset it to 20
    Radius {
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        value: String,
    },

    /// Reset the corner radius to 20
    ResetRadius,

    /// Toggle Markdown preview in the editor
    EditorPreview,
}
