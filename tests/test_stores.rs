mod helpers;

use anyhow::Result;
use helpers::TestData;
use notaview::application::{NoteRepository, SettingsRepository};
use notaview::domain::{FontSize, Settings};
use notaview::infrastructure::{JsonNoteStore, JsonSettingsStore};
use serde_json::json;

#[test]
fn given_settings_missing_theme_when_loading_then_defaults_theme_and_keeps_others() -> Result<()> {
    // Arrange
    let data = TestData::new()?;
    data.write_settings_raw(r#"{"font_size": "3", "preview": false, "bradius": 10.0, "pw": true, "lang": "es"}"#)?;
    let mut store = JsonSettingsStore::new(&data.dir);

    // Act
    let settings = store.load_settings();

    // Assert
    assert_eq!(settings.theme, "Pro");
    assert_eq!(settings.font_size, FontSize::Large);
    assert!(!settings.preview);
    assert_eq!(settings.bradius, 10.0);
    assert!(settings.pw);
    assert_eq!(settings.extra.get("lang"), Some(&json!("es")));
    Ok(())
}

#[test]
fn given_corrupt_settings_when_loading_then_returns_defaults() -> Result<()> {
    let data = TestData::new()?;
    data.write_settings_raw("{{{")?;

    let settings = JsonSettingsStore::new(&data.dir).load_settings();

    assert_eq!(settings, Settings::default());
    Ok(())
}

#[test]
fn given_corrupt_notes_when_loading_then_returns_empty_list() -> Result<()> {
    let data = TestData::new()?;
    data.write_notes_raw("this is not json")?;

    let notes = JsonNoteStore::new(&data.dir).load_notes();

    assert!(notes.is_empty());
    Ok(())
}

#[test]
fn given_empty_notes_file_when_loading_then_returns_empty_list() -> Result<()> {
    let data = TestData::new()?;
    data.write_notes_raw("")?;

    let notes = JsonNoteStore::new(&data.dir).load_notes();

    assert!(notes.is_empty());
    Ok(())
}

#[test]
fn given_valid_notes_when_saving_loaded_list_then_json_is_unchanged() -> Result<()> {
    // Arrange
    let data = TestData::with_notes(3)?;
    let before = data.read_notes()?;
    let mut store = JsonNoteStore::new(&data.dir);

    // Act
    let notes = store.load_notes();
    store.save_notes(&notes)?;

    // Assert
    assert_eq!(data.read_notes()?, before);
    Ok(())
}

#[test]
fn given_saved_list_when_loading_twice_then_bytes_are_stable() -> Result<()> {
    // Arrange
    let data = TestData::with_notes(2)?;
    let mut store = JsonNoteStore::new(&data.dir);
    let notes = store.load_notes();
    store.save_notes(&notes)?;
    let first = std::fs::read(&data.notes_path)?;

    // Act
    let notes = store.load_notes();
    store.save_notes(&notes)?;

    // Assert
    assert_eq!(std::fs::read(&data.notes_path)?, first);
    Ok(())
}

#[test]
fn given_foreign_records_when_saving_then_they_are_preserved() -> Result<()> {
    // Arrange
    let data = TestData::new()?;
    let records = json!([
        {"Type": 2, "checklist": ["a", "b"]},
        {"Type": 1, "nombre": "kept", "text": ""}
    ]);
    data.write_notes(&records)?;
    let mut store = JsonNoteStore::new(&data.dir);

    // Act
    let notes = store.load_notes();
    store.save_notes(&notes)?;

    // Assert
    let saved = data.read_notes()?;
    assert_eq!(saved[0], records[0]);
    assert_eq!(saved[1], records[1]);
    Ok(())
}

#[test]
fn given_settings_with_one_unusable_value_when_loading_then_keeps_the_rest() -> Result<()> {
    // Arrange
    let data = TestData::new()?;
    data.write_settings_raw(r#"{"theme": "Tec", "font_size": "3", "bradius": "15", "pw": "on"}"#)?;
    let mut store = JsonSettingsStore::new(&data.dir);

    // Act
    let settings = store.load_settings();
    store.save_settings(&settings)?;

    // Assert
    assert_eq!(settings.theme, "Tec");
    assert_eq!(settings.font_size, FontSize::Large);
    assert_eq!(settings.bradius, 15.0);
    assert!(!settings.pw);
    let stored = data.read_settings()?;
    assert_eq!(stored["theme"], json!("Tec"));
    assert_eq!(stored["font_size"], json!("3"));
    assert_eq!(stored["pw"], json!(false));
    Ok(())
}

#[test]
fn given_records_with_odd_field_types_when_loading_then_every_record_is_kept() -> Result<()> {
    // Arrange
    let data = TestData::new()?;
    let records = json!([
        {"Type": 1, "nombre": "keep me"},
        {"Type": 2, "nombre": 42},
        {"Type": 1, "text": 5},
        {"Type": 1.0, "nombre": "float type"}
    ]);
    data.write_notes(&records)?;
    let mut store = JsonNoteStore::new(&data.dir);

    // Act
    let notes = store.load_notes();
    store.save_notes(&notes)?;

    // Assert
    assert_eq!(notes.len(), 4);
    let kinds: Vec<bool> = notes.iter().map(|note| note.is_note()).collect();
    assert_eq!(kinds, vec![true, false, true, true]);
    assert_eq!(data.read_notes()?, records.as_array().cloned().unwrap_or_default());
    Ok(())
}
