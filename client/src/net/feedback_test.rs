use super::*;
use crate::net::fake::FakeTransport;
use crate::net::http::Method;
use records::{FeedbackStatus, FeedbackType};

fn feedback_json(id: u32, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "suggestion",
        "message": "Add isiXhosa",
        "status": status,
        "priority": "medium",
        "created_at": "2024-01-01T00:00:00Z"
    })
}

#[test]
fn anonymous_submit_has_no_auth_header() {
    let payload = FeedbackCreate::from_form(FeedbackType::Suggestion, "hello", "", "").unwrap();
    let req = submit_request(None, &payload);
    assert_eq!(req.method, Method::Post);
    assert!(req.url.ends_with("/api/v1/feedback/"));
    assert!(req.bearer.is_none());
}

#[test]
fn status_update_sends_json_body_with_bearer() {
    let req = update_request("admin-token", "1", &FeedbackUpdate::status(FeedbackStatus::Resolved));
    assert_eq!(req.method, Method::Put);
    assert!(req.url.ends_with("/api/v1/feedback/1"));
    assert_eq!(req.body, Some(serde_json::json!({ "status": "resolved" })));
    assert_eq!(
        req.headers(),
        vec![("Content-Type", "application/json".to_owned()), ("Authorization", "Bearer admin-token".to_owned())]
    );
}

#[test]
fn update_and_refresh_refetches_list_and_stats() {
    let transport = FakeTransport::new();
    transport.respond_json(200, feedback_json(1, "resolved"));
    transport.respond_json(200, serde_json::json!([feedback_json(1, "resolved")]));
    transport.respond_json(200, serde_json::json!({ "total": 1, "resolved": 1 }));

    let (items, stats) = futures::executor::block_on(update_and_refresh(
        &transport,
        "tok",
        "1",
        &FeedbackUpdate::status(FeedbackStatus::Resolved),
    ))
    .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[1].method, Method::Get);
    assert!(requests[1].url.ends_with("/api/v1/feedback/"));
    assert!(requests[2].url.ends_with("/api/v1/feedback/admin/stats"));
    assert_eq!(items[0].status, FeedbackStatus::Resolved);
    assert_eq!(stats.resolved, 1);
}

#[test]
fn failed_update_skips_refetch() {
    let transport = FakeTransport::new();
    transport.respond(500, r#"{"detail":"database unavailable"}"#);
    let err = futures::executor::block_on(update_and_refresh(
        &transport,
        "tok",
        "1",
        &FeedbackUpdate::status(FeedbackStatus::Closed),
    ))
    .unwrap_err();
    assert_eq!(err.to_string(), "database unavailable");
    assert_eq!(transport.requests().len(), 1);
}
