//! User display and offline preferences.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::wire::opt_string_or_number;

/// Base font size in CSS pixels used when nothing else is configured.
pub const DEFAULT_TEXT_SIZE: u32 = 16;
/// Line-height multiplier used when nothing else is configured.
pub const DEFAULT_TEXT_SPACING: f64 = 1.0;

/// Allowed text sizes offered by the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Small = 14,
    Normal = 16,
    Large = 18,
    ExtraLarge = 20,
}

impl TextSize {
    pub const ALL: [Self; 4] = [Self::Small, Self::Normal, Self::Large, Self::ExtraLarge];

    #[must_use]
    pub fn px(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Normal => "Normal",
            Self::Large => "Large",
            Self::ExtraLarge => "Extra large",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub offline_mode_enabled: bool,
    #[serde(default = "default_ui_language")]
    pub ui_language: String,
    #[serde(default = "default_text_size")]
    pub text_size: u32,
    #[serde(default = "default_text_spacing")]
    pub text_spacing: f64,
    #[serde(default)]
    pub high_contrast_mode: bool,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_ui_language() -> String {
    "en".to_owned()
}

fn default_text_size() -> u32 {
    DEFAULT_TEXT_SIZE
}

fn default_text_spacing() -> f64 {
    DEFAULT_TEXT_SPACING
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            user_id: None,
            dark_mode: false,
            offline_mode_enabled: false,
            ui_language: default_ui_language(),
            text_size: DEFAULT_TEXT_SIZE,
            text_spacing: DEFAULT_TEXT_SPACING,
            high_contrast_mode: false,
            updated_at: None,
        }
    }
}

impl UserPreferences {
    /// Return a copy with `update` applied field by field.
    #[must_use]
    pub fn merged(&self, update: &PreferencesUpdate) -> Self {
        let mut next = self.clone();
        if let Some(v) = update.dark_mode {
            next.dark_mode = v;
        }
        if let Some(v) = update.offline_mode_enabled {
            next.offline_mode_enabled = v;
        }
        if let Some(v) = &update.ui_language {
            next.ui_language.clone_from(v);
        }
        if let Some(v) = update.text_size {
            next.text_size = v;
        }
        if let Some(v) = update.text_spacing {
            next.text_spacing = v;
        }
        if let Some(v) = update.high_contrast_mode {
            next.high_contrast_mode = v;
        }
        next
    }
}

/// Body of `PUT /api/v1/user-preferences`. Only set fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_mode_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_contrast_mode: Option<bool>,
}

impl PreferencesUpdate {
    /// Fold a later update over this one; later fields win.
    #[must_use]
    pub fn then(mut self, later: &Self) -> Self {
        if later.dark_mode.is_some() {
            self.dark_mode = later.dark_mode;
        }
        if later.offline_mode_enabled.is_some() {
            self.offline_mode_enabled = later.offline_mode_enabled;
        }
        if later.ui_language.is_some() {
            self.ui_language.clone_from(&later.ui_language);
        }
        if later.text_size.is_some() {
            self.text_size = later.text_size;
        }
        if later.text_spacing.is_some() {
            self.text_spacing = later.text_spacing;
        }
        if later.high_contrast_mode.is_some() {
            self.high_contrast_mode = later.high_contrast_mode;
        }
        self
    }
}
