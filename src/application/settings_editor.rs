// src/application/settings_editor.rs
use crate::application::SettingsRepository;
use crate::constants::DEFAULT_RADIUS;
use crate::domain::{DomainError, FontSize, Settings, ThemeName};
use tracing::{debug, info, instrument};

/// Settings held in memory. Every setter writes the whole record back at once.
pub struct SettingsEditor<S: SettingsRepository> {
    repository: S,
    settings: Settings,
}

impl<S: SettingsRepository> SettingsEditor<S> {
    pub fn open(mut repository: S) -> Self {
        let settings = repository.load_settings();
        debug!(?settings, "Loaded settings");
        Self {
            repository,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[instrument(level = "debug", skip(self))]
    pub fn change_theme(&mut self, theme: ThemeName) -> Result<(), DomainError> {
        self.settings.theme = theme.to_string();
        info!(%theme, "Theme changed");
        self.persist()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn change_font_size(&mut self, size: FontSize) -> Result<(), DomainError> {
        self.settings.font_size = size;
        self.persist()
    }

    /// Whether home tiles show the note body.
    #[instrument(level = "debug", skip(self))]
    pub fn set_preview(&mut self, preview: bool) -> Result<(), DomainError> {
        self.settings.preview = preview;
        self.persist()
    }

    /// Store a corner radius given as text. Text that is not a finite number
    /// stores the default radius.
    #[instrument(level = "debug", skip(self))]
    pub fn change_radius(&mut self, value: &str) -> Result<f64, DomainError> {
        let radius = match value.trim().parse::<f64>() {
            Ok(r) if r.is_finite() => r,
            _ => {
                debug!(value, "Radius did not parse, using default");
                DEFAULT_RADIUS
            }
        };
        self.settings.bradius = radius;
        self.persist()?;
        Ok(radius)
    }

    pub fn reset_radius(&mut self) -> Result<(), DomainError> {
        self.settings.bradius = DEFAULT_RADIUS;
        self.persist()
    }

    /// Flip the editor's Markdown preview and return the new state.
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_editor_preview(&mut self) -> Result<bool, DomainError> {
        self.settings.pw = !self.settings.pw;
        self.persist()?;
        Ok(self.settings.pw)
    }

    fn persist(&mut self) -> Result<(), DomainError> {
        self.repository.save_settings(&self.settings)
    }
}
