use super::*;
use crate::net::fake::FakeTransport;

#[test]
fn body_requests_carry_json_content_type() {
    let req = ApiRequest::put("/x".to_owned(), &serde_json::json!({ "a": 1 })).bearer(Some("tok"));
    assert_eq!(
        req.headers(),
        vec![("Content-Type", "application/json".to_owned()), ("Authorization", "Bearer tok".to_owned())]
    );
}

#[test]
fn empty_token_is_not_attached() {
    let req = ApiRequest::get("/x".to_owned()).bearer(Some(""));
    assert!(req.bearer.is_none());
    assert!(req.headers().is_empty());
}

#[test]
fn unauthorized_and_forbidden_map_to_auth_class() {
    assert_eq!(error_for_status(401, "").class(), ErrorClass::Auth);
    assert_eq!(error_for_status(403, "{\"detail\":\"no\"}").class(), ErrorClass::Auth);
}

#[test]
fn detail_field_becomes_message() {
    let err = error_for_status(422, r#"{"detail":"Message must not be empty"}"#);
    assert_eq!(err, ApiError::Http { status: 422, message: "Message must not be empty".to_owned() });
    assert_eq!(err.class(), ErrorClass::Other);
}

#[test]
fn plain_body_or_status_fallback_message() {
    assert_eq!(error_for_status(500, "boom").to_string(), "boom");
    assert_eq!(error_for_status(502, "  ").to_string(), "request failed: 502");
}

#[test]
fn network_failures_classify_by_message() {
    assert_eq!(ApiError::Network("TypeError: Failed to fetch".to_owned()).class(), ErrorClass::Connectivity);
    assert_eq!(ApiError::Network("JsError: something odd".to_owned()).class(), ErrorClass::Other);
    assert_eq!(ApiError::Offline.class(), ErrorClass::Connectivity);
}

#[test]
fn call_json_decodes_success_body() {
    let transport = FakeTransport::new();
    transport.respond_json(200, serde_json::json!({ "n": 3 }));
    let value: serde_json::Value =
        futures::executor::block_on(call_json(&transport, ApiRequest::get("/n".to_owned()))).unwrap();
    assert_eq!(value["n"], 3);
}

#[test]
fn call_json_reports_decode_errors() {
    let transport = FakeTransport::new();
    transport.respond(200, "not json");
    let err = futures::executor::block_on(call_json::<serde_json::Value>(&transport, ApiRequest::get("/n".to_owned())))
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
