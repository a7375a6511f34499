//! User settings: display, language, and offline preferences.
//!
//! DESIGN
//! ======
//! Changes are applied to the document as soon as they are made, then sent.
//! A refused change is rolled back to the last accepted set. While offline
//! the change is queued and the page keeps the local value;
//! the cached preference set is what the page shows on the next offline
//! visit.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use records::{PreferencesUpdate, TextSize, UserPreferences};

use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::state::settings::SettingsState;
use crate::state::ui::UiState;

/// UI languages offered, as `(code, native name)`.
pub const LANGUAGES: [(&str, &str); 11] = [
    ("en", "English"),
    ("af", "Afrikaans"),
    ("nr", "isiNdebele"),
    ("xh", "isiXhosa"),
    ("zu", "isiZulu"),
    ("nso", "Sepedi"),
    ("st", "Sesotho"),
    ("tn", "Setswana"),
    ("ss", "siSwati"),
    ("ve", "Tshivenda"),
    ("ts", "Xitsonga"),
];

/// Line spacing steps offered by the spacing control.
pub const SPACING_STEPS: [f64; 4] = [1.0, 1.25, 1.5, 2.0];

#[must_use]
pub fn text_size_from_px(px: u32) -> Option<TextSize> {
    TextSize::ALL.into_iter().find(|t| t.px() == px)
}

/// Parse the spacing `<select>` value, accepting only offered steps.
#[must_use]
pub fn parse_spacing(raw: &str) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    SPACING_STEPS.into_iter().find(|s| (s - value).abs() < f64::EPSILON)
}

fn save(auth: RwSignal<AuthState>, settings: RwSignal<SettingsState>, ui: RwSignal<UiState>, update: PreferencesUpdate) {
    let mut staged = None;
    settings.update(|s| staged = s.stage(&update));
    let Some(next) = staged else {
        return;
    };
    apply_locally(&next);

    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            use crate::offline::flows::{Submission, update_preferences};

            let queue = crate::offline::browser_queue();
            let online = crate::util::connectivity::is_online();
            match update_preferences(&crate::net::http::FetchTransport, &queue, online, &token, update).await {
                Ok(Submission::Sent(prefs)) => {
                    apply_locally(&prefs);
                    settings.update(|s| s.saved(prefs));
                }
                Ok(Submission::Queued(_)) => {
                    settings.update(SettingsState::queued);
                    crate::app::refresh_pending(ui).await;
                }
                Err(e) => {
                    let message = crate::app::report_submit_failure(auth, &e);
                    let mut restored = None;
                    settings.update(|s| restored = s.rejected(message));
                    if let Some(prefs) = restored {
                        apply_locally(&prefs);
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, ui, update);
    }
}

fn apply_locally(prefs: &UserPreferences) {
    crate::util::appearance::apply(prefs);
    crate::util::session::set_language(&prefs.ui_language);
}

fn load(auth: RwSignal<AuthState>, settings: RwSignal<SettingsState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        settings.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let queue = crate::offline::browser_queue();
            let online = crate::util::connectivity::is_online();
            let transport = crate::net::http::FetchTransport;
            match crate::offline::flows::load_preferences(&transport, &queue, online, &token).await {
                Ok(loaded) => {
                    if let Some(prefs) = loaded.preferences() {
                        apply_locally(prefs);
                    }
                    settings.update(|s| s.loaded(loaded));
                }
                Err(e) => {
                    let message = crate::app::report_submit_failure(auth, &e);
                    settings.update(|s| s.failed(message));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, settings);
    }
}

fn reset(auth: RwSignal<AuthState>, settings: RwSignal<SettingsState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        settings.update(|s| s.saving = true);
        leptos::task::spawn_local(async move {
            let queue = crate::offline::browser_queue();
            let online = crate::util::connectivity::is_online();
            let transport = crate::net::http::FetchTransport;
            match crate::offline::flows::reset_preferences(&transport, &queue, online, &token).await {
                Ok(prefs) => {
                    apply_locally(&prefs);
                    settings.update(|s| s.saved(prefs));
                }
                Err(e) => {
                    let message = crate::app::report_submit_failure(auth, &e);
                    settings.update(|s| s.failed(message));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, settings);
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<RwSignal<SettingsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    load(auth, settings);

    let prefs = move || settings.get().prefs;
    let toggle = move |pick: fn(&UserPreferences) -> bool, make: fn(bool) -> PreferencesUpdate| {
        move |_: leptos::ev::Event| {
            if let Some(p) = settings.get_untracked().prefs {
                save(auth, settings, ui, make(!pick(&p)));
            }
        }
    };
    let on_retry = Callback::new(move |()| load(auth, settings));

    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>
            <Show when=move || !auth.get().is_signed_in()>
                <p class="settings-page__signin">"Sign in to manage your settings."</p>
            </Show>
            {move || settings.get().notice.map(|n| view! { <p class="settings-page__notice" role="status">{n}</p> })}
            {move || settings.get().error.map(|message| view! { <ErrorBanner message=message on_retry=on_retry /> })}
            <Show when=move || prefs().is_some()>
                <div class="settings-page__group">
                    <h2>"Display"</h2>
                    <label class="settings-page__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs().is_some_and(|p| p.dark_mode)
                            on:change=toggle(|p| p.dark_mode, |v| PreferencesUpdate { dark_mode: Some(v), ..PreferencesUpdate::default() })
                        />
                        "Dark mode"
                    </label>
                    <label class="settings-page__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs().is_some_and(|p| p.high_contrast_mode)
                            on:change=toggle(
                                |p| p.high_contrast_mode,
                                |v| PreferencesUpdate { high_contrast_mode: Some(v), ..PreferencesUpdate::default() },
                            )
                        />
                        "High contrast"
                    </label>
                    <label class="settings-page__field">
                        "Text size"
                        <select
                            prop:value=move || prefs().map(|p| p.text_size.to_string()).unwrap_or_default()
                            on:change=move |ev| {
                                let size = event_target_value(&ev).parse().ok().and_then(text_size_from_px);
                                if let Some(size) = size {
                                    let update = PreferencesUpdate { text_size: Some(size.px()), ..PreferencesUpdate::default() };
                                    save(auth, settings, ui, update);
                                }
                            }
                        >
                            {TextSize::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.px().to_string()>{t.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="settings-page__field">
                        "Text spacing"
                        <select
                            prop:value=move || prefs().map(|p| p.text_spacing.to_string()).unwrap_or_default()
                            on:change=move |ev| {
                                if let Some(spacing) = parse_spacing(&event_target_value(&ev)) {
                                    let update = PreferencesUpdate { text_spacing: Some(spacing), ..PreferencesUpdate::default() };
                                    save(auth, settings, ui, update);
                                }
                            }
                        >
                            {SPACING_STEPS
                                .into_iter()
                                .map(|s| view! { <option value=s.to_string()>{format!("{s}x")}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
                <div class="settings-page__group">
                    <h2>"Language"</h2>
                    <select
                        aria-label="Interface language"
                        prop:value=move || prefs().map(|p| p.ui_language).unwrap_or_default()
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            if LANGUAGES.iter().any(|(c, _)| *c == code) {
                                save(auth, settings, ui, PreferencesUpdate { ui_language: Some(code), ..PreferencesUpdate::default() });
                            }
                        }
                    >
                        {LANGUAGES
                            .into_iter()
                            .map(|(code, name)| view! { <option value=code>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="settings-page__group">
                    <h2>"Offline"</h2>
                    <label class="settings-page__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs().is_some_and(|p| p.offline_mode_enabled)
                            on:change=toggle(
                                |p| p.offline_mode_enabled,
                                |v| PreferencesUpdate { offline_mode_enabled: Some(v), ..PreferencesUpdate::default() },
                            )
                        />
                        "Keep content available offline"
                    </label>
                </div>
                <button
                    class="btn settings-page__reset"
                    disabled=move || settings.get().saving
                    on:click=move |_| reset(auth, settings)
                >
                    "Reset to defaults"
                </button>
            </Show>
        </section>
    }
}
