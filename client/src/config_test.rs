use super::*;

#[test]
fn feedback_endpoints_match_backend_paths() {
    assert!(feedback().ends_with("/api/v1/feedback/"));
    assert!(feedback_admin_stats().ends_with("/api/v1/feedback/admin/stats"));
    assert!(feedback_item("1").ends_with("/api/v1/feedback/1"));
}

#[test]
fn preference_endpoints_match_backend_paths() {
    assert!(user_preferences().ends_with("/api/v1/user-preferences"));
    assert!(user_preferences_reset().ends_with("/api/v1/user-preferences/reset"));
}

#[test]
fn glossary_names_are_percent_encoded() {
    assert!(study_session("Agric & Food/2").ends_with("/api/v1/learning/glossaries/Agric%20&%20Food%2F2/study-session"));
}

#[test]
fn random_terms_carries_count_query() {
    assert!(random_terms(12).ends_with("/api/v1/learning/random-terms?count=12"));
}

#[test]
fn comment_vote_path_includes_id() {
    assert!(comment_vote("c 1").ends_with("/api/v1/comments/c%201/vote"));
}
