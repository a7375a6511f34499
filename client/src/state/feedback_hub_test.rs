use super::*;
use records::{FeedbackPriority, FeedbackStatus, FeedbackType};

fn item(id: usize, kind: FeedbackType, status: FeedbackStatus, message: &str) -> Feedback {
    Feedback {
        id: id.to_string(),
        kind,
        message: message.to_owned(),
        name: None,
        email: None,
        status,
        priority: FeedbackPriority::Medium,
        created_at: "2024-05-01T00:00:00Z".to_owned(),
        admin_response: None,
        resolved_at: None,
        resolved_by_user_id: None,
    }
}

fn many(n: usize) -> Vec<Feedback> {
    (0..n)
        .map(|i| {
            let kind = if i % 2 == 0 { FeedbackType::Suggestion } else { FeedbackType::Complaint };
            item(i, kind, FeedbackStatus::Open, &format!("message {i}"))
        })
        .collect()
}

#[test]
fn twenty_three_items_page_three_shows_tail() {
    let mut state = FeedbackHubState::default();
    state.loaded(many(23), FeedbackStats::default());
    state.next_page();
    state.next_page();

    assert_eq!(state.page().range_label(), "Showing 21-23 of 23");
    assert_eq!(state.visible().len(), 3);
    assert!(!state.page().has_next());
    assert_eq!(state.heading(), "Feedback Items (23)");
}

#[test]
fn changing_filter_resets_to_first_page() {
    let mut state = FeedbackHubState::default();
    state.loaded(many(23), FeedbackStats::default());
    state.next_page();
    assert_eq!(state.page_index, 1);

    state.set_filter(TriageFilter { kind: Some(FeedbackType::Complaint), ..TriageFilter::default() });

    assert_eq!(state.page_index, 0);
    assert_eq!(state.heading(), "Feedback Items (11)");
}

#[test]
fn shrinking_list_clamps_page() {
    let mut state = FeedbackHubState::default();
    state.loaded(many(23), FeedbackStats::default());
    state.next_page();
    state.next_page();

    state.loaded(many(5), FeedbackStats::default());

    assert_eq!(state.page_index, 0);
    assert_eq!(state.page().range_label(), "Showing 1-5 of 5");
}

#[test]
fn search_is_case_insensitive_over_message() {
    let mut state = FeedbackHubState::default();
    state.loaded(
        vec![
            item(1, FeedbackType::Complaint, FeedbackStatus::Open, "Search is SLOW"),
            item(2, FeedbackType::Compliment, FeedbackStatus::Resolved, "great app"),
        ],
        FeedbackStats::default(),
    );
    state.set_filter(TriageFilter { search: "slow".into(), ..TriageFilter::default() });
    let ids: Vec<String> = state.visible().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["1".to_owned()]);
}

#[test]
fn empty_result_labels() {
    let mut state = FeedbackHubState::default();
    state.loaded(many(4), FeedbackStats::default());
    state.set_filter(TriageFilter { status: Some(FeedbackStatus::Closed), ..TriageFilter::default() });
    assert_eq!(state.heading(), "Feedback Items (0)");
    assert_eq!(state.page().range_label(), "Showing 0-0 of 0");
    assert!(!state.page().has_prev());
    assert!(!state.page().has_next());
}

#[test]
fn failure_keeps_items_and_sets_error() {
    let mut state = FeedbackHubState::default();
    state.loaded(many(3), FeedbackStats::default());
    state.updating_id = Some("1".into());
    state.failed("Database unavailable".into());
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.error.as_deref(), Some("Database unavailable"));
    assert!(state.updating_id.is_none());
}
