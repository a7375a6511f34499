use super::*;

#[test]
fn feedback_type_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_value(FeedbackType::Complaint).unwrap(), serde_json::json!("complaint"));
    assert_eq!(serde_json::to_value(FeedbackStatus::InProgress).unwrap(), serde_json::json!("in_progress"));
    assert_eq!(serde_json::to_value(FeedbackPriority::Critical).unwrap(), serde_json::json!("critical"));
}

#[test]
fn from_str_rejects_unknown_values() {
    assert_eq!("resolved".parse::<FeedbackStatus>().unwrap(), FeedbackStatus::Resolved);
    let err = "pending".parse::<FeedbackStatus>().unwrap_err();
    assert_eq!(err, RecordError::UnknownVariant { kind: "feedback status", value: "pending".to_owned() });
}

#[test]
fn feedback_accepts_numeric_ids_and_missing_optionals() {
    let raw = serde_json::json!({
        "id": 1,
        "type": "suggestion",
        "message": "Add more languages",
        "created_at": "2024-01-01T10:00:00Z"
    });
    let fb: Feedback = serde_json::from_value(raw).unwrap();
    assert_eq!(fb.id, "1");
    assert_eq!(fb.kind, FeedbackType::Suggestion);
    assert_eq!(fb.status, FeedbackStatus::Open);
    assert_eq!(fb.priority, FeedbackPriority::Medium);
    assert!(fb.admin_response.is_none());
    assert!(fb.resolved_by_user_id.is_none());
}

#[test]
fn create_from_form_trims_and_drops_blank_contact_fields() {
    let payload = FeedbackCreate::from_form(FeedbackType::Complaint, "  too slow  ", " ", "a@b.c ").unwrap();
    assert_eq!(payload.message, "too slow");
    assert!(payload.name.is_none());
    assert_eq!(payload.email.as_deref(), Some("a@b.c"));
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "type": "complaint", "message": "too slow", "email": "a@b.c" })
    );
}

#[test]
fn create_from_form_rejects_blank_message() {
    assert!(FeedbackCreate::from_form(FeedbackType::Suggestion, "   \n", "", "").is_none());
}

#[test]
fn status_update_serializes_only_status() {
    let body = serde_json::to_value(FeedbackUpdate::status(FeedbackStatus::Resolved)).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "resolved" }));
}

#[test]
fn stats_count_for_missing_type_is_zero() {
    let stats: FeedbackStats = serde_json::from_value(serde_json::json!({
        "total": 3,
        "open": 2,
        "by_type": { "complaint": 1 }
    }))
    .unwrap();
    assert_eq!(stats.count_for(FeedbackType::Complaint), 1);
    assert_eq!(stats.count_for(FeedbackType::Compliment), 0);
    assert_eq!(stats.resolved, 0);
}
