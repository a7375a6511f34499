//! Logical endpoint names mapped to backend URLs.
//!
//! All paths are host-relative by default; the host server forwards
//! `/api/v1/*` upstream. A build-time `MARITO_API_BASE` overrides the origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn api_base() -> &'static str {
    option_env!("MARITO_API_BASE").unwrap_or("")
}

fn url(path: &str) -> String {
    format!("{}{path}", api_base().trim_end_matches('/'))
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

// ---- feedback ----

#[must_use]
pub fn feedback() -> String {
    url("/api/v1/feedback/")
}

#[must_use]
pub fn feedback_admin_stats() -> String {
    url("/api/v1/feedback/admin/stats")
}

#[must_use]
pub fn feedback_item(id: &str) -> String {
    url(&format!("/api/v1/feedback/{}", segment(id)))
}

// ---- users ----

#[must_use]
pub fn users_me() -> String {
    url("/api/v1/users/me")
}

// ---- preferences ----

#[must_use]
pub fn user_preferences() -> String {
    url("/api/v1/user-preferences")
}

#[must_use]
pub fn user_preferences_reset() -> String {
    url("/api/v1/user-preferences/reset")
}

// ---- learning ----

#[must_use]
pub fn learning_paths() -> String {
    url("/api/v1/learning/paths")
}

#[must_use]
pub fn learning_path(id: &str) -> String {
    url(&format!("/api/v1/learning/paths/{}", segment(id)))
}

#[must_use]
pub fn glossary_progress(glossary: &str) -> String {
    url(&format!("/api/v1/learning/glossaries/{}/progress", segment(glossary)))
}

#[must_use]
pub fn study_session(glossary: &str) -> String {
    url(&format!("/api/v1/learning/glossaries/{}/study-session", segment(glossary)))
}

#[must_use]
pub fn session_position(glossary: &str) -> String {
    url(&format!("/api/v1/learning/glossaries/{}/position", segment(glossary)))
}

#[must_use]
pub fn learning_progress() -> String {
    url("/api/v1/learning/progress")
}

#[must_use]
pub fn word_counts() -> String {
    url("/api/v1/learning/word-counts")
}

#[must_use]
pub fn random_terms(count: usize) -> String {
    url(&format!("/api/v1/learning/random-terms?count={count}"))
}

#[must_use]
pub fn learning_dashboard() -> String {
    url("/api/v1/learning/dashboard")
}

// ---- terms and comments ----

#[must_use]
pub fn term_comments(term_id: &str) -> String {
    url(&format!("/api/v1/terms/{}/comments", segment(term_id)))
}

#[must_use]
pub fn comments() -> String {
    url("/api/v1/comments/")
}

#[must_use]
pub fn comment(id: &str) -> String {
    url(&format!("/api/v1/comments/{}", segment(id)))
}

#[must_use]
pub fn comment_vote(id: &str) -> String {
    url(&format!("/api/v1/comments/{}/vote", segment(id)))
}
