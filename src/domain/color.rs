// src/domain/color.rs
use crate::constants::{FALLBACK_NOTE_COLOR, LUMINANCE_THRESHOLD};
use serde::Serialize;

/// Foreground tone picked for text drawn over a note color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTone {
    Dark,
    Light,
}

impl TextTone {
    /// Pick the tone readable over `background`.
    ///
    /// Malformed colors fall back to light text.
    pub fn for_background(background: &str) -> Self {
        match relative_luminance(background) {
            Some(luminance) if luminance > LUMINANCE_THRESHOLD => TextTone::Dark,
            _ => TextTone::Light,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            TextTone::Dark => "#000000",
            TextTone::Light => "#FFFFFF",
        }
    }
}

/// Weighted luminance of the leading RGB channels of a hex color, in `0..=1`.
///
/// Leading `#` characters are ignored and anything after the sixth digit
/// (an alpha channel, say) is not looked at. A channel that is missing or
/// not hexadecimal yields `None`.
pub fn relative_luminance(hex: &str) -> Option<f64> {
    let digits: Vec<char> = hex.trim_start_matches('#').chars().collect();

    let channel = |i: usize| -> Option<f64> {
        let start = (i * 2).min(digits.len());
        let end = (i * 2 + 2).min(digits.len());
        let text: String = digits[start..end].iter().collect();
        if text.is_empty() {
            return None;
        }
        u8::from_str_radix(&text, 16).ok().map(f64::from)
    };

    let (r, g, b) = (channel(0)?, channel(1)?, channel(2)?);
    Some((0.2126 * r + 0.7152 * g + 0.0722 * b) / 255.0)
}

/// Normalize a stored color for writing: empty becomes white and a leading
/// `#` is ensured.
pub fn normalize_hex(color: &str) -> String {
    if color.is_empty() {
        return FALLBACK_NOTE_COLOR.to_string();
    }
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}
