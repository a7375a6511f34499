use super::*;

#[test]
fn whitespace_message_cannot_be_submitted() {
    assert!(!can_submit("", false));
    assert!(!can_submit("   \n\t", false));
    assert!(can_submit(" ok ", false));
}

#[test]
fn submit_is_disabled_while_in_flight() {
    assert!(!can_submit("hello", true));
}

#[test]
fn queued_submission_reports_offline_sync() {
    assert_eq!(confirmation(false), THANK_YOU_MESSAGE);
    assert!(confirmation(true).contains("offline"));
}
