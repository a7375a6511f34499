use super::*;

#[test]
fn default_preferences_add_no_classes() {
    assert!(root_classes(&UserPreferences::default()).is_empty());
}

#[test]
fn dark_and_high_contrast_both_apply() {
    let prefs = UserPreferences { dark_mode: true, high_contrast_mode: true, ..UserPreferences::default() };
    assert_eq!(root_classes(&prefs), vec!["dark-mode", "high-contrast"]);
}

#[test]
fn style_carries_size_and_spacing() {
    let prefs = UserPreferences { text_size: 18, text_spacing: 1.5, ..UserPreferences::default() };
    assert_eq!(root_style(&prefs), "--base-font-size: 18px; --text-spacing: 1.5;");
}
