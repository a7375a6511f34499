use super::*;

fn item(id: &str, kind: FeedbackType, status: FeedbackStatus, message: &str) -> Feedback {
    Feedback {
        id: id.to_owned(),
        kind,
        message: message.to_owned(),
        name: None,
        email: None,
        status,
        priority: records::FeedbackPriority::Medium,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        admin_response: None,
        resolved_at: None,
        resolved_by_user_id: None,
    }
}

fn fixture() -> Vec<Feedback> {
    vec![
        item("1", FeedbackType::Suggestion, FeedbackStatus::Open, "Please add more Sesotho terms"),
        item("2", FeedbackType::Complaint, FeedbackStatus::InProgress, "The search is very slow"),
        item("3", FeedbackType::Compliment, FeedbackStatus::Resolved, "Great glossary, thank you!"),
    ]
}

#[test]
fn type_filter_reduces_count_label() {
    let items = fixture();
    let filter = TriageFilter { kind: Some(FeedbackType::Suggestion), ..TriageFilter::default() };
    let filtered = filter_items(&items, &filter);
    assert_eq!(count_label(filtered.len()), "Feedback Items (1)");
}

#[test]
fn search_is_case_insensitive_substring() {
    let items = fixture();
    let filter = TriageFilter { search: "SLOW".to_owned(), ..TriageFilter::default() };
    let filtered = filter_items(&items, &filter);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].message, "The search is very slow");
    assert_eq!(filtered[0].kind, FeedbackType::Complaint);
}

#[test]
fn status_and_type_filters_combine() {
    let items = fixture();
    let filter = TriageFilter {
        kind: Some(FeedbackType::Complaint),
        status: Some(FeedbackStatus::Open),
        search: String::new(),
    };
    assert!(filter_items(&items, &filter).is_empty());
}

#[test]
fn empty_filter_matches_everything() {
    let items = fixture();
    assert_eq!(filter_items(&items, &TriageFilter::default()).len(), 3);
    assert!(!TriageFilter::default().is_active());
}

#[test]
fn select_value_all_means_no_filter() {
    assert_eq!(parse_select::<FeedbackType>(ALL), None);
    assert_eq!(parse_select::<FeedbackStatus>("in_progress"), Some(FeedbackStatus::InProgress));
    assert_eq!(parse_select::<FeedbackStatus>("bogus"), None);
}

#[test]
fn first_page_of_twenty_five() {
    let page = Page::new(0, 25);
    assert_eq!(page.range_label(), "Showing 1-10 of 25");
    assert_eq!(page.page_count(), 3);
    assert!(!page.has_prev());
    assert!(page.has_next());
}

#[test]
fn last_page_is_partial() {
    let page = Page::new(2, 25);
    assert_eq!(page.range_label(), "Showing 21-25 of 25");
    assert!(page.has_prev());
    assert!(!page.has_next());
    let rows: Vec<usize> = (0..25).collect();
    assert_eq!(page.slice(&rows), &[20, 21, 22, 23, 24]);
}

#[test]
fn index_clamps_when_set_shrinks() {
    let page = Page::new(5, 12);
    assert_eq!(page.index, 1);
    assert_eq!(page.range_label(), "Showing 11-12 of 12");
}

#[test]
fn empty_set_has_single_empty_page() {
    let page = Page::new(3, 0);
    assert_eq!(page.index, 0);
    assert_eq!(page.range_label(), "Showing 0-0 of 0");
    assert!(!page.has_next());
    assert!(page.slice::<u8>(&[]).is_empty());
}

#[test]
fn select_values_follow_the_filter() {
    let mut filter = TriageFilter::default();
    assert_eq!((filter.kind_value(), filter.status_value()), (ALL, ALL));

    filter.kind = parse_select("suggestion");
    filter.status = parse_select("in_progress");
    assert_eq!(filter.kind_value(), "suggestion");
    assert_eq!(filter.status_value(), "in_progress");

    filter.kind = parse_select(ALL);
    assert_eq!(filter.kind_value(), ALL);
}
