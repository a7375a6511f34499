//! Apply display preferences to the document root.
//!
//! Dark mode and high contrast are root classes; text size and spacing are
//! inline custom properties the stylesheet reads.

#[cfg(test)]
#[path = "appearance_test.rs"]
mod appearance_test;

use records::UserPreferences;

/// Root classes implied by `prefs`.
#[must_use]
pub fn root_classes(prefs: &UserPreferences) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if prefs.dark_mode {
        classes.push("dark-mode");
    }
    if prefs.high_contrast_mode {
        classes.push("high-contrast");
    }
    classes
}

/// Inline style for the root element.
#[must_use]
pub fn root_style(prefs: &UserPreferences) -> String {
    format!("--base-font-size: {}px; --text-spacing: {};", prefs.text_size, prefs.text_spacing)
}

/// Apply `prefs` to `<html>`.
pub fn apply(prefs: &UserPreferences) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        let wanted = root_classes(prefs);
        for class in ["dark-mode", "high-contrast"] {
            if wanted.contains(&class) {
                let _ = class_list.add_1(class);
            } else {
                let _ = class_list.remove_1(class);
            }
        }
        let _ = el.set_attribute("style", &root_style(prefs));
        let _ = el.set_attribute("lang", &prefs.ui_language);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}
