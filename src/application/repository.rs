// src/application/repository.rs
use crate::domain::{DomainError, Note, Settings};

/// Backing storage for the ordered note list.
pub trait NoteRepository {
    /// Load every stored record in order.
    ///
    /// A missing or unreadable store yields an empty list rather than an error.
    fn load_notes(&mut self) -> Vec<Note>;

    /// Replace the stored list with `notes`.
    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError>;
}

/// Backing storage for the settings singleton.
pub trait SettingsRepository {
    /// Load settings, falling back to defaults for a missing or unreadable
    /// store and back-filling missing keys.
    fn load_settings(&mut self) -> Settings;

    /// Overwrite the stored settings with `settings`.
    fn save_settings(&mut self, settings: &Settings) -> Result<(), DomainError>;
}
