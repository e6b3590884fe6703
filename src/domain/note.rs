// src/domain/note.rs
use crate::constants::{NOTE_TYPE, UNTITLED_NOTE};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A record from `contenedores.json`.
///
/// Every field is optional on disk. Absent fields stay absent when the record
/// is written back, and keys this crate does not know about are carried in
/// `extra`, so records of other types survive a load/save cycle untouched.
/// A known key holding a value of another type (`"nombre": 42`) is kept raw
/// in `extra` as well instead of failing the record.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Note {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color2: Option<String>,
    #[serde(rename = "text", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "pw", skip_serializing_if = "Option::is_none")]
    pub preview: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Map<String, Value>> for Note {
    fn from(mut record: Map<String, Value>) -> Self {
        Self {
            kind: take_field(&mut record, "Type", Value::as_i64),
            title: take_field(&mut record, "nombre", as_string),
            color: take_field(&mut record, "color", as_string),
            color2: take_field(&mut record, "color2", as_string),
            body: take_field(&mut record, "text", as_string),
            preview: take_field(&mut record, "pw", Value::as_bool),
            extra: record,
        }
    }
}

impl<'de> Deserialize<'de> for Note {
    /// Any JSON object is a record; only a non-object fails.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Note::from)
    }
}

/// Remove `key` from `record` if `read` accepts its value. Values of the wrong
/// type stay in `record`.
fn take_field<T>(
    record: &mut Map<String, Value>,
    key: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = record.get(key).and_then(read)?;
    record.remove(key);
    Some(value)
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

impl Note {
    /// Build a complete note record as written by the editor.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        color: impl Into<String>,
        color2: impl Into<String>,
        preview: bool,
    ) -> Self {
        Self {
            kind: Some(NOTE_TYPE),
            title: Some(title.into()),
            color: Some(color.into()),
            color2: Some(color2.into()),
            body: Some(body.into()),
            preview: Some(preview),
            extra: Map::new(),
        }
    }

    /// Records without a `Type` key count as notes. A `Type` that is a float
    /// counts when it equals 1 (`1.0`).
    pub fn is_note(&self) -> bool {
        match (self.kind, self.extra.get("Type")) {
            (Some(kind), _) => kind == NOTE_TYPE,
            (None, Some(raw)) => raw.as_f64() == Some(NOTE_TYPE as f64),
            (None, None) => true,
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_NOTE)
    }

    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Case-insensitive substring match over title and body.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.display_title().to_lowercase().contains(&needle)
            || self.body_text().to_lowercase().contains(&needle)
    }
}
