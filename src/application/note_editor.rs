// src/application/note_editor.rs
use crate::constants::UNNAMED_NOTE;
use crate::domain::color::normalize_hex;
use crate::domain::view::EditorMode;
use crate::domain::{Note, Palette, TextTone};

/// Form state of the editor screen.
///
/// A create draft starts empty with the theme's colors. An edit draft starts
/// from the stored note; colors it lacks come from the theme.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorDraft {
    pub mode: EditorMode,
    pub title: String,
    pub body: String,
    pub color: String,
    pub color2: String,
    /// Per-note preview flag, copied through on save. Never read for display.
    pub stored_preview: bool,
    /// Body shown as rendered Markdown. Every editor visit starts on the raw
    /// input; only the preview toggle turns this on.
    pub show_markdown: bool,
}

impl EditorDraft {
    pub fn blank(palette: &Palette) -> Self {
        Self {
            mode: EditorMode::Create,
            title: String::new(),
            body: String::new(),
            color: palette.bg.to_string(),
            color2: palette.bg2.to_string(),
            stored_preview: false,
            show_markdown: false,
        }
    }

    pub fn from_note(index: usize, note: &Note, palette: &Palette) -> Self {
        Self {
            mode: EditorMode::Edit { index },
            title: note.title.clone().unwrap_or_default(),
            body: note.body_text().to_string(),
            color: note.color.clone().unwrap_or_else(|| palette.bg.to_string()),
            color2: note
                .color2
                .clone()
                .unwrap_or_else(|| palette.bg2.to_string()),
            stored_preview: note.preview.unwrap_or(false),
            show_markdown: false,
        }
    }

    /// Tone for the title and body text over the note's primary color.
    pub fn text_tone(&self) -> TextTone {
        TextTone::for_background(&self.color)
    }

    /// The record written on submit.
    pub fn to_note(&self) -> Note {
        let title = if self.title.is_empty() {
            UNNAMED_NOTE
        } else {
            self.title.as_str()
        };
        Note::new(
            title,
            self.body.clone(),
            normalize_hex(&self.color),
            normalize_hex(&self.color2),
            self.stored_preview,
        )
    }
}
