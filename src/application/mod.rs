// src/application/mod.rs
pub mod note_book;
pub mod note_editor;
pub mod repository;
pub mod router;
pub mod settings_editor;
pub mod view_builder;

pub use note_book::NoteBook;
pub use note_editor::EditorDraft;
pub use repository::{NoteRepository, SettingsRepository};
pub use router::{Action, ViewRouter};
pub use settings_editor::SettingsEditor;
