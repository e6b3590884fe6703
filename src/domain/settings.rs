// src/domain/settings.rs
use crate::constants::{DEFAULT_RADIUS, DEFAULT_THEME};
use crate::domain::theme::{palette_for, Palette};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Contents of `settings.json`.
///
/// Missing keys are back-filled from the defaults; keys that are present are
/// kept as they are, including ones this crate does not use. A known key
/// whose value cannot be used falls back to that key's default alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub theme: String,
    pub font_size: FontSize,
    pub preview: bool,
    pub bradius: f64,
    /// Markdown preview in the editor.
    pub pw: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            font_size: FontSize::default(),
            preview: true,
            bradius: DEFAULT_RADIUS,
            pw: false,
            extra: Map::new(),
        }
    }
}

impl From<Map<String, Value>> for Settings {
    fn from(mut record: Map<String, Value>) -> Self {
        let defaults = Settings::default();
        Self {
            theme: take_setting(&mut record, "theme", |v| v.as_str().map(str::to_owned))
                .unwrap_or(defaults.theme),
            font_size: take_setting(&mut record, "font_size", FontSize::from_value)
                .unwrap_or(defaults.font_size),
            preview: take_setting(&mut record, "preview", Value::as_bool)
                .unwrap_or(defaults.preview),
            bradius: take_setting(&mut record, "bradius", radius_from_value)
                .unwrap_or(defaults.bradius),
            pw: take_setting(&mut record, "pw", Value::as_bool).unwrap_or(defaults.pw),
            extra: record,
        }
    }
}

impl<'de> Deserialize<'de> for Settings {
    /// Any JSON object reads; only a non-object fails.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Settings::from)
    }
}

/// Remove `key` and parse it. An unusable value is dropped so the default
/// takes its place on the next save.
fn take_setting<T>(
    record: &mut Map<String, Value>,
    key: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    record.remove(key).as_ref().and_then(read)
}

/// Radius as a number or numeric text (`"15"`). Non-finite values are unusable.
fn radius_from_value(value: &Value) -> Option<f64> {
    let radius = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    radius.is_finite().then_some(radius)
}

impl Settings {
    pub fn palette(&self) -> Palette {
        palette_for(&self.theme)
    }

    pub fn sizing(&self) -> Sizing {
        let (title, body) = self.font_size.text_sizes();
        Sizing {
            title,
            body,
            radius: self.bradius,
        }
    }
}

/// UI sizes derived from the settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sizing {
    pub title: u32,
    pub body: u32,
    pub radius: f64,
}

/// Font size step, stored as the strings `"1"`, `"2"` and `"3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "1",
            FontSize::Medium => "2",
            FontSize::Large => "3",
        }
    }

    /// Parse a stored value: `"1"`..`"3"` or the bare integers.
    pub fn from_value(value: &Value) -> Option<FontSize> {
        match value {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_u64().and_then(|n| n.to_string().parse().ok()),
            _ => None,
        }
    }

    /// Title and body text sizes for this step.
    pub fn text_sizes(self) -> (u32, u32) {
        match self {
            FontSize::Small => (15, 12),
            FontSize::Medium => (20, 17),
            FontSize::Large => (25, 22),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(FontSize::Small),
            "2" => Ok(FontSize::Medium),
            "3" => Ok(FontSize::Large),
            other => Err(format!("unknown font size '{other}' (expected 1, 2 or 3)")),
        }
    }
}

impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FontSize {
    /// Accepts `"1"`..`"3"` or the bare integers; anything else reads as medium.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(FontSize::from_value(&value).unwrap_or_default())
    }
}
