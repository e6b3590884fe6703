// src/domain/mod.rs
pub mod color;
pub mod error;
pub mod note;
pub mod route;
pub mod settings;
pub mod theme;
pub mod view;

pub use color::TextTone;
pub use error::DomainError;
pub use note::Note;
pub use route::Route;
pub use settings::{FontSize, Settings, Sizing};
pub use theme::{Palette, ThemeName};
pub use view::View;
