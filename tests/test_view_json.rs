mod helpers;

use anyhow::Result;
use helpers::TestData;
use notaview::application::Action;

#[test]
fn given_home_view_when_serializing_then_tags_view_and_lists_tiles() -> Result<()> {
    // Arrange
    let data = TestData::with_notes(2)?;
    let router = data.open_router();

    // Act
    let json = serde_json::to_value(router.render())?;

    // Assert
    assert_eq!(json["view"], "home");
    assert_eq!(json["route"], "/");
    assert_eq!(json["tiles"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["tiles"][1]["edit_route"], "/edit/1");
    assert_eq!(json["tiles"][1]["excerpt"], "body 1");
    assert_eq!(json["show_delete"], false);
    assert!(json.get("search").is_none());
    Ok(())
}

#[test]
fn given_edit_view_when_serializing_then_includes_mode_and_tone() -> Result<()> {
    // Arrange
    let data = TestData::with_notes(1)?;
    let mut router = data.open_router();

    // Act
    let view = router.dispatch(Action::Navigate("/edit/0".to_string()))?;
    let json = serde_json::to_value(&view)?;

    // Assert
    assert_eq!(json["view"], "editor");
    assert_eq!(json["route"], "/edit/0");
    assert_eq!(json["mode"]["kind"], "edit");
    assert_eq!(json["mode"]["index"], 0);
    assert_eq!(json["text_tone"], "light");
    assert_eq!(json["colors"][0], "#121828");
    Ok(())
}

#[test]
fn given_settings_view_when_serializing_then_includes_options() -> Result<()> {
    let data = TestData::new()?;
    let mut router = data.open_router();

    let view = router.dispatch(Action::Navigate("/settings".to_string()))?;
    let json = serde_json::to_value(&view)?;

    assert_eq!(json["view"], "settings");
    assert_eq!(json["font_size"], "2");
    assert_eq!(json["radius"], 20.0);
    assert_eq!(json["themes"][4], "Golden");
    assert_eq!(json["sizing"]["title"], 20);
    Ok(())
}
