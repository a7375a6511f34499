//! Settings page state.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use records::{PreferencesUpdate, UserPreferences};

use crate::offline::flows::{LoadedPreferences, NO_CACHED_SETTINGS_MESSAGE};

pub const CACHED_NOTICE: &str = "You're offline. Showing your last saved settings.";
pub const QUEUED_NOTICE: &str = "Saved offline. Your settings will sync when you're back online.";

#[derive(Clone, Debug, Default)]
pub struct SettingsState {
    pub prefs: Option<UserPreferences>,
    /// Last preference set the server (or the offline queue) accepted.
    /// A rejected change rolls `prefs` back to it.
    pub confirmed: Option<UserPreferences>,
    pub notice: Option<String>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl SettingsState {
    pub fn loaded(&mut self, loaded: LoadedPreferences) {
        self.loading = false;
        self.error = None;
        match loaded {
            LoadedPreferences::Fresh(prefs) => {
                self.confirmed = Some(prefs.clone());
                self.prefs = Some(prefs);
                self.notice = None;
            }
            LoadedPreferences::Cached(prefs) => {
                self.confirmed = Some(prefs.clone());
                self.prefs = Some(prefs);
                self.notice = Some(CACHED_NOTICE.to_owned());
            }
            LoadedPreferences::Unavailable => {
                self.prefs = None;
                self.confirmed = None;
                self.notice = None;
                self.error = Some(NO_CACHED_SETTINGS_MESSAGE.to_owned());
            }
        }
    }

    /// Apply a change locally before it is sent. Returns the new preference
    /// set so the document can be restyled immediately.
    pub fn stage(&mut self, update: &PreferencesUpdate) -> Option<UserPreferences> {
        let next = self.prefs.as_ref()?.merged(update);
        self.prefs = Some(next.clone());
        self.saving = true;
        Some(next)
    }

    /// The server confirmed; its copy wins.
    pub fn saved(&mut self, prefs: UserPreferences) {
        self.confirmed = Some(prefs.clone());
        self.prefs = Some(prefs);
        self.saving = false;
        self.notice = None;
    }

    /// The change sits in the offline queue; keep it as the local truth.
    pub fn queued(&mut self) {
        self.confirmed.clone_from(&self.prefs);
        self.saving = false;
        self.notice = Some(QUEUED_NOTICE.to_owned());
    }

    /// A staged change was refused. Restores the last accepted preference
    /// set and returns it so the document can be restyled back.
    pub fn rejected(&mut self, message: String) -> Option<UserPreferences> {
        self.prefs.clone_from(&self.confirmed);
        self.failed(message);
        self.prefs.clone()
    }

    pub fn failed(&mut self, message: String) {
        self.saving = false;
        self.loading = false;
        self.error = Some(message);
    }
}
