use super::*;

#[test]
fn auth_failures_ask_for_login() {
    let msg = failure_message(&ApiError::Unauthorized { status: 403 });
    assert_eq!(msg, SESSION_EXPIRED_MESSAGE);
}

#[test]
fn connectivity_failures_ask_for_a_connection() {
    assert_eq!(failure_message(&ApiError::Offline), OFFLINE_ACTION_MESSAGE);
    let fetch = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(failure_message(&fetch), OFFLINE_ACTION_MESSAGE);
    assert_ne!(failure_message(&fetch), QUEUED_MESSAGE);
}

#[test]
fn other_failures_are_verbatim() {
    let err = ApiError::Http { status: 500, message: "Internal Server Error".to_owned() };
    assert_eq!(failure_message(&err), "Internal Server Error");
}

#[test]
fn storage_keys_match_i18n_and_auth_conventions() {
    assert_eq!(ACCESS_TOKEN_KEY, "accessToken");
    assert_eq!(USER_DATA_KEY, "userData");
    assert_eq!(LANGUAGE_KEY, "i18nextLng");
}

#[test]
fn native_build_has_no_stored_token() {
    assert!(access_token().is_none());
}
