// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, SettingsRepository};
use crate::domain::{DomainError, Note, Settings};

/// `count` complete notes titled `note 0`, `note 1`, ... with bodies `body 0`, ...
pub fn sample_notes(count: usize) -> Vec<Note> {
    (0..count)
        .map(|i| {
            Note::new(
                format!("note {i}"),
                format!("body {i}"),
                format!("#{:02X}{:02X}{:02X}", (i * 10) % 256, (i * 20) % 256, (i * 30) % 256),
                "#1E293B",
                false,
            )
        })
        .collect()
}

/// In-memory note store for use-case tests.
///
/// Every save is recorded; grab the log with `saved()` before handing the
/// repository over.
///
/// # Examples
///
/// ```
/// use notaview::application::NoteBook;
/// use notaview::util::testing::{sample_notes, MockNoteRepository};
///
/// let repository = MockNoteRepository::builder()
///     .with_notes(sample_notes(2))
///     .build();
/// let saved = repository.saved();
/// let mut book = NoteBook::open(repository);
/// book.remove(0).unwrap();
/// assert_eq!(saved.borrow()[0].len(), 1);
/// ```
pub struct MockNoteRepository {
    notes: Vec<Note>,
    fail_save: bool,
    saved: Rc<RefCell<Vec<Vec<Note>>>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self::builder().with_notes(notes).build()
    }

    /// Every list passed to `save_notes`, oldest first.
    pub fn saved(&self) -> Rc<RefCell<Vec<Vec<Note>>>> {
        Rc::clone(&self.saved)
    }
}

impl NoteRepository for MockNoteRepository {
    fn load_notes(&mut self) -> Vec<Note> {
        self.notes.clone()
    }

    fn save_notes(&mut self, notes: &[Note]) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::Storage("save disabled".to_string()));
        }
        self.notes = notes.to_vec();
        self.saved.borrow_mut().push(notes.to_vec());
        Ok(())
    }
}

/// Builder for MockNoteRepository
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    fail_save: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_save: false,
        }
    }

    /// Notes returned by load_notes
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes = notes;
        self
    }

    /// Make every save fail with a storage error
    pub fn with_failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            fail_save: self.fail_save,
            saved: Rc::new(RefCell::new(vec![])),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory settings store, recording every save.
pub struct MockSettingsRepository {
    settings: Settings,
    fail_save: bool,
    saved: Rc<RefCell<Vec<Settings>>>,
}

impl MockSettingsRepository {
    pub fn builder() -> MockSettingsRepositoryBuilder {
        MockSettingsRepositoryBuilder::default()
    }

    pub fn saved(&self) -> Rc<RefCell<Vec<Settings>>> {
        Rc::clone(&self.saved)
    }
}

impl Default for MockSettingsRepository {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SettingsRepository for MockSettingsRepository {
    fn load_settings(&mut self) -> Settings {
        self.settings.clone()
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::Storage("save disabled".to_string()));
        }
        self.settings = settings.clone();
        self.saved.borrow_mut().push(settings.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockSettingsRepositoryBuilder {
    settings: Settings,
    fail_save: bool,
}

impl MockSettingsRepositoryBuilder {
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn build(self) -> MockSettingsRepository {
        MockSettingsRepository {
            settings: self.settings,
            fail_save: self.fail_save,
            saved: Rc::new(RefCell::new(vec![])),
        }
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["pulldown_cmark", "regex"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
