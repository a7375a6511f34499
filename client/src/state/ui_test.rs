use super::*;

#[test]
fn default_is_online_and_quiet() {
    let state = UiState::default();
    assert!(state.online);
    assert_eq!(state.banner(), None);
}

#[test]
fn offline_banner_wins_over_pending_count() {
    let state = UiState { online: false, pending_sync: 3, ..UiState::default() };
    assert!(state.banner().unwrap().starts_with("You're offline"));
}

#[test]
fn pending_count_is_pluralized() {
    let one = UiState { pending_sync: 1, ..UiState::default() };
    let many = UiState { pending_sync: 4, ..UiState::default() };
    assert_eq!(one.banner().as_deref(), Some("1 change waiting to sync"));
    assert_eq!(many.banner().as_deref(), Some("4 changes waiting to sync"));
}

#[test]
fn only_one_flush_runs_at_a_time() {
    let mut state = UiState::default();
    assert!(state.begin_sync());
    assert!(!state.begin_sync());
    state.end_sync();
    assert!(state.begin_sync());
}
