// src/infrastructure/json_store.rs
use crate::application::{NoteRepository, SettingsRepository};
use crate::constants::{JSON_INDENT, NOTES_FILE, SETTINGS_FILE};
use crate::domain::{DomainError, Note, Settings};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Note list persisted as a JSON array in `contenedores.json`.
#[derive(Debug, Clone)]
pub struct JsonNoteStore {
    path: PathBuf,
}

impl JsonNoteStore {
    /// Store inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::at(data_dir.as_ref().join(NOTES_FILE))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteRepository for JsonNoteStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load_notes(&mut self) -> Vec<Note> {
        read_json(&self.path).unwrap_or_default()
    }

    #[instrument(level = "debug", skip(self, notes), fields(path = %self.path.display()))]
    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        write_json(&self.path, notes).map_err(|e| DomainError::Storage(format!("{e:#}")))
    }
}

/// Settings persisted as a JSON object in `settings.json`.
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::at(data_dir.as_ref().join(SETTINGS_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for JsonSettingsStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load_settings(&mut self) -> Settings {
        read_json(&self.path).unwrap_or_default()
    }

    #[instrument(level = "debug", skip(self, settings), fields(path = %self.path.display()))]
    fn save_settings(&mut self, settings: &Settings) -> Result<(), DomainError> {
        write_json(&self.path, settings).map_err(|e| DomainError::Storage(format!("{e:#}")))
    }
}

/// Read and parse `path`. A missing file and a file that does not parse both
/// give `None`; the caller treats either as first run.
fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(error = %e, "Store not readable, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Store is not valid JSON, using defaults");
            None
        }
    }
}

/// Serialize with a four-space indent. Non-ASCII text is written as is.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Overwrite `path` with the whole serialized value.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value).context("Failed to serialize store")?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), "Store written");
    Ok(())
}
