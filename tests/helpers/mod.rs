use anyhow::{Context, Result};
use notaview::application::ViewRouter;
use notaview::infrastructure::{JsonNoteStore, JsonSettingsStore};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary data directory holding the two store files
#[allow(dead_code)]
pub struct TestData {
    _temp_dir: TempDir,
    pub dir: PathBuf,
    pub notes_path: PathBuf,
    pub settings_path: PathBuf,
}

#[allow(dead_code)]
impl TestData {
    /// Empty data directory, as on first run
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let dir = temp_dir.path().to_path_buf();

        Ok(Self {
            notes_path: dir.join("contenedores.json"),
            settings_path: dir.join("settings.json"),
            dir,
            _temp_dir: temp_dir,
        })
    }

    /// Data directory with `count` notes titled `note 0`, `note 1`, ...
    pub fn with_notes(count: usize) -> Result<Self> {
        let data = Self::new()?;
        let notes: Vec<Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "Type": 1,
                    "nombre": format!("note {i}"),
                    "color": "#121828",
                    "color2": "#1E293B",
                    "text": format!("body {i}"),
                    "pw": false
                })
            })
            .collect();
        data.write_notes(&Value::Array(notes))?;
        Ok(data)
    }

    pub fn write_notes(&self, notes: &Value) -> Result<()> {
        write_file(&self.notes_path, &serde_json::to_string_pretty(notes)?)
    }

    pub fn write_notes_raw(&self, content: &str) -> Result<()> {
        write_file(&self.notes_path, content)
    }

    pub fn write_settings_raw(&self, content: &str) -> Result<()> {
        write_file(&self.settings_path, content)
    }

    /// Parsed contents of contenedores.json
    pub fn read_notes(&self) -> Result<Vec<Value>> {
        let content = std::fs::read_to_string(&self.notes_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Parsed contents of settings.json
    pub fn read_settings(&self) -> Result<Value> {
        let content = std::fs::read_to_string(&self.settings_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn open_router(&self) -> ViewRouter<JsonNoteStore, JsonSettingsStore> {
        notaview::open_router(&self.dir)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
