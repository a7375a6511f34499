use super::*;

#[test]
fn recognizes_browser_fetch_failures() {
    assert!(is_connectivity_message("TypeError: Failed to fetch"));
    assert!(is_connectivity_message("NetworkError when attempting to fetch resource."));
    assert!(is_connectivity_message("net::ERR_INTERNET_DISCONNECTED"));
    assert!(is_connectivity_message("Load failed"));
}

#[test]
fn ignores_application_errors() {
    assert!(!is_connectivity_message("Message must not be empty"));
    assert!(!is_connectivity_message("request failed: 500"));
}

#[test]
fn native_build_reports_online() {
    assert!(is_online());
}
