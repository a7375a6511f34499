use super::*;

#[test]
fn defaults_are_light_english_normal_text() {
    let prefs = UserPreferences::default();
    assert!(!prefs.dark_mode);
    assert!(!prefs.high_contrast_mode);
    assert_eq!(prefs.ui_language, "en");
    assert_eq!(prefs.text_size, TextSize::Normal.px());
}

#[test]
fn missing_fields_deserialize_to_defaults() {
    let prefs: UserPreferences = serde_json::from_value(serde_json::json!({ "user_id": 12, "dark_mode": true })).unwrap();
    assert_eq!(prefs.user_id.as_deref(), Some("12"));
    assert!(prefs.dark_mode);
    assert_eq!(prefs.text_size, DEFAULT_TEXT_SIZE);
    assert!((prefs.text_spacing - DEFAULT_TEXT_SPACING).abs() < f64::EPSILON);
}

#[test]
fn merged_applies_only_set_fields() {
    let prefs = UserPreferences::default();
    let update = PreferencesUpdate { text_size: Some(20), ui_language: Some("zu".to_owned()), ..Default::default() };
    let next = prefs.merged(&update);
    assert_eq!(next.text_size, 20);
    assert_eq!(next.ui_language, "zu");
    assert!(!next.dark_mode);
}

#[test]
fn later_update_wins_when_folding() {
    let first = PreferencesUpdate { dark_mode: Some(true), text_size: Some(14), ..Default::default() };
    let second = PreferencesUpdate { dark_mode: Some(false), ..Default::default() };
    let folded = first.then(&second);
    assert_eq!(folded.dark_mode, Some(false));
    assert_eq!(folded.text_size, Some(14));
}

#[test]
fn update_serializes_only_set_fields() {
    let update = PreferencesUpdate { high_contrast_mode: Some(true), ..Default::default() };
    assert_eq!(serde_json::to_value(update).unwrap(), serde_json::json!({ "high_contrast_mode": true }));
}
