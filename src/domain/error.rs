// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found at index {0}")]
    NoteNotFound(usize),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}
