// src/constants.rs
//
// File names, defaults and option tables shared across the crate.

/// Note records, a JSON array, in the data directory.
pub const NOTES_FILE: &str = "contenedores.json";

/// Settings object, in the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// `Type` value marking a record as a note. Other values are kept on disk but
/// never rendered.
pub const NOTE_TYPE: i64 = 1;

/// Title shown for a stored record that has none.
pub const UNTITLED_NOTE: &str = "Sin título";

/// Title written when the editor is submitted with an empty title.
pub const UNNAMED_NOTE: &str = "Sin nombre";

/// Color written when the editor has no color to submit.
pub const FALLBACK_NOTE_COLOR: &str = "#FFFFFF";

pub const DEFAULT_THEME: &str = "Pro";

/// Corner radius used on first run, on reset, and when a radius does not parse.
pub const DEFAULT_RADIUS: f64 = 20.0;

/// Radius choices offered on the settings screen.
pub const RADIUS_OPTIONS: [&str; 7] = ["0", "5", "10", "15", "20", "25", "30"];

/// Luminance above which note text is drawn dark.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Indent used for both JSON files.
pub const JSON_INDENT: &[u8] = b"    ";

/// Delay in milliseconds after writing the HTML file before returning, so the
/// browser can read it before the temp directory goes away.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
