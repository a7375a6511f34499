use super::*;
use crate::net::fake::FakeTransport;
use crate::net::http::Method;

#[test]
fn get_fills_missing_fields_with_defaults() {
    let transport = FakeTransport::new();
    transport.respond_json(200, serde_json::json!({ "user_id": 3, "dark_mode": true }));

    let prefs = futures::executor::block_on(get(&transport, "tok")).unwrap();
    assert!(prefs.dark_mode);
    assert_eq!(prefs.ui_language, "en");
    assert_eq!(prefs.text_size, 16);
    assert!(transport.requests()[0].url.ends_with("/api/v1/user-preferences"));
}

#[test]
fn update_puts_partial_change() {
    let transport = FakeTransport::new();
    transport.respond_json(200, serde_json::json!({ "high_contrast_mode": true }));

    let change = PreferencesUpdate { high_contrast_mode: Some(true), ..PreferencesUpdate::default() };
    let prefs = futures::executor::block_on(update(&transport, "tok", &change)).unwrap();
    assert!(prefs.high_contrast_mode);

    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.body, Some(serde_json::json!({ "high_contrast_mode": true })));
}

#[test]
fn reset_posts_without_body() {
    let transport = FakeTransport::new();
    transport.respond_json(200, serde_json::json!({}));

    let prefs = futures::executor::block_on(reset(&transport, "tok")).unwrap();
    assert_eq!(prefs, UserPreferences::default());

    let req = &transport.requests()[0];
    assert_eq!(req.method, Method::Post);
    assert!(req.url.ends_with("/api/v1/user-preferences/reset"));
    assert!(req.body.is_none());
}
