use super::*;

#[test]
fn text_size_accepts_only_offered_sizes() {
    assert_eq!(text_size_from_px(18), Some(TextSize::Large));
    assert_eq!(text_size_from_px(17), None);
}

#[test]
fn spacing_accepts_only_offered_steps() {
    assert_eq!(parse_spacing("1.5"), Some(1.5));
    assert_eq!(parse_spacing("1"), Some(1.0));
    assert_eq!(parse_spacing("3"), None);
    assert_eq!(parse_spacing("wide"), None);
}

#[test]
fn languages_start_with_english_default() {
    assert_eq!(LANGUAGES[0].0, UserPreferences::default().ui_language);
    assert_eq!(LANGUAGES.len(), 11);
}
