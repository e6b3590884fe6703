// src/infrastructure/mod.rs
pub mod json_store;
pub mod renderer;

pub use json_store::{JsonNoteStore, JsonSettingsStore};
pub use renderer::PageRenderer;
