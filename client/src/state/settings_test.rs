use super::*;

#[test]
fn unavailable_shows_no_cache_message() {
    let mut state = SettingsState { loading: true, ..SettingsState::default() };
    state.loaded(LoadedPreferences::Unavailable);
    assert!(!state.loading);
    assert!(state.prefs.is_none());
    assert_eq!(
        state.error.as_deref(),
        Some("No cached settings available. Connect to the internet to load your settings.")
    );
}

#[test]
fn cached_load_sets_offline_notice() {
    let mut state = SettingsState::default();
    state.loaded(LoadedPreferences::Cached(UserPreferences::default()));
    assert_eq!(state.notice.as_deref(), Some(CACHED_NOTICE));
    assert!(state.error.is_none());
}

#[test]
fn staging_merges_before_save() {
    let mut state = SettingsState::default();
    state.loaded(LoadedPreferences::Fresh(UserPreferences::default()));

    let next = state
        .stage(&PreferencesUpdate { dark_mode: Some(true), text_size: Some(18), ..PreferencesUpdate::default() })
        .unwrap();

    assert!(next.dark_mode);
    assert_eq!(next.text_size, 18);
    assert!(state.saving);
    state.queued();
    assert!(!state.saving);
    assert_eq!(state.notice.as_deref(), Some(QUEUED_NOTICE));
}

#[test]
fn staging_without_prefs_does_nothing() {
    let mut state = SettingsState::default();
    assert!(state.stage(&PreferencesUpdate::default()).is_none());
    assert!(!state.saving);
}

#[test]
fn rejected_change_restores_last_accepted_prefs() {
    let mut state = SettingsState::default();
    state.loaded(LoadedPreferences::Fresh(UserPreferences::default()));
    state.stage(&PreferencesUpdate { dark_mode: Some(true), ..PreferencesUpdate::default() });
    assert!(state.prefs.as_ref().unwrap().dark_mode);

    let restored = state.rejected("Forbidden".to_owned()).unwrap();

    assert!(!restored.dark_mode);
    assert_eq!(state.prefs, Some(UserPreferences::default()));
    assert!(!state.saving);
    assert_eq!(state.error.as_deref(), Some("Forbidden"));
}

#[test]
fn queued_change_survives_a_later_rejection() {
    let mut state = SettingsState::default();
    state.loaded(LoadedPreferences::Fresh(UserPreferences::default()));
    state.stage(&PreferencesUpdate { text_size: Some(20), ..PreferencesUpdate::default() });
    state.queued();

    state.stage(&PreferencesUpdate { dark_mode: Some(true), ..PreferencesUpdate::default() });
    let restored = state.rejected("Internal Server Error".to_owned()).unwrap();

    assert_eq!(restored.text_size, 20);
    assert!(!restored.dark_mode);
}
