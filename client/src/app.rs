//! Root application component with routing, context providers, and the
//! offline sync loop.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the app-wide signals (session, connectivity, per-page state)
//! and listens for the browser's `online`/`offline` events. Coming back
//! online flushes the offline queue: the service worker replays it where
//! Background Sync exists, the page replays it everywhere else.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::net::http::{ApiError, ErrorClass};
use crate::offline::flows::SubmitError;
use crate::pages::{
    feedback::FeedbackPage, feedback_hub::FeedbackHub, learning_path::LearningPathPage, profile::ProfilePage,
    settings::SettingsPage, term_detail::TermDetailPage,
};
use crate::state::{
    auth::AuthState, comments::CommentsState, feedback_hub::FeedbackHubState, settings::SettingsState,
    study::StudyState, ui::UiState,
};
use crate::util::session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="manifest" href="/manifest.json"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Message for a failed call. Auth failures also end the session.
pub fn report_failure(auth: RwSignal<AuthState>, err: &ApiError) -> String {
    auth.update(|a| {
        a.absorb(err);
    });
    session::failure_message(err)
}

/// [`report_failure`] for the offline-aware write flows.
pub fn report_submit_failure(auth: RwSignal<AuthState>, err: &SubmitError) -> String {
    match err {
        SubmitError::Api(e) => report_failure(auth, e),
        SubmitError::Store(e) => e.to_string(),
    }
}

/// Re-count queued writes for the status banner.
#[cfg(feature = "hydrate")]
pub async fn refresh_pending(ui: RwSignal<UiState>) {
    let count = crate::offline::browser_queue().pending().await.map_or(0, |p| p.len());
    ui.update(|u| u.pending_sync = count);
}

/// Flush the offline queue, unless a flush is already running.
#[cfg(feature = "hydrate")]
pub async fn replay_queue(ui: RwSignal<UiState>) {
    use crate::offline::Flush;

    let mut claimed = false;
    ui.update(|u| claimed = u.begin_sync());
    if !claimed {
        return;
    }
    let queue = crate::offline::browser_queue();
    match queue.flush(&crate::net::http::FetchTransport).await {
        Ok(Flush::Replayed(report)) if report.sent + report.dropped > 0 => {
            leptos::logging::log!(
                "offline replay: {} sent, {} dropped, {} remaining",
                report.sent,
                report.dropped,
                report.remaining
            );
            let label = match report.sent {
                1 => "Synced 1 offline change".to_owned(),
                n => format!("Synced {n} offline changes"),
            };
            ui.update(|u| u.last_sync = Some(label));
        }
        Ok(Flush::HandedOff(tags)) if !tags.is_empty() => {
            leptos::logging::log!("offline queue handed to the service worker ({} tags)", tags.len());
        }
        Ok(_) => {}
        Err(e) => leptos::logging::warn!("offline replay failed: {e}"),
    }
    ui.update(UiState::end_sync);
    refresh_pending(ui).await;
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);
    provide_context(RwSignal::new(FeedbackHubState::default()));
    provide_context(RwSignal::new(StudyState::default()));
    provide_context(RwSignal::new(CommentsState::default()));
    provide_context(RwSignal::new(SettingsState::default()));

    #[cfg(feature = "hydrate")]
    {
        use crate::util::connectivity::is_online;

        ui.update(|u| u.online = is_online());

        leptos::task::spawn_local(async move {
            crate::offline::background_sync::register_service_worker().await;
            if let Ok(Some(prefs)) = crate::offline::browser_queue().cached_preferences().await {
                crate::util::appearance::apply(&prefs);
            }
            if is_online() {
                replay_queue(ui).await;
            } else {
                refresh_pending(ui).await;
            }
        });

        if let Some(token) = auth.get_untracked().token {
            leptos::task::spawn_local(async move {
                match crate::net::users::me(&crate::net::http::FetchTransport, &token).await {
                    Ok(user) => auth.update(|a| a.signed_in(user)),
                    Err(e) if e.class() == ErrorClass::Auth => auth.update(AuthState::expire),
                    Err(e) => {
                        leptos::logging::warn!("could not refresh user: {e}");
                        auth.update(|a| a.loading = false);
                    }
                }
            });
        }

        let online = window_event_listener(leptos::ev::online, move |_| {
            ui.update(|u| u.online = true);
            leptos::task::spawn_local(replay_queue(ui));
        });
        let offline = window_event_listener(leptos::ev::offline, move |_| {
            ui.update(|u| u.online = false);
        });
        on_cleanup(move || {
            online.remove();
            offline.remove();
        });
    }

    let is_admin = move || auth.get().is_admin();

    view! {
        <Stylesheet id="leptos" href="/pkg/marito.css"/>
        <Title text="Marito"/>

        <Router>
            <header class="app-header">
                <a href="/" class="app-header__brand">"Marito"</a>
                <nav class="app-header__nav">
                    <A href="/learning">"Learning"</A>
                    <A href="/feedback">"Feedback"</A>
                    <Show when=is_admin>
                        <A href="/admin/feedback">"Feedback Hub"</A>
                    </Show>
                    <A href="/settings">"Settings"</A>
                    <A href="/profile">"Profile"</A>
                </nav>
            </header>
            {move || ui.get().banner().map(|text| view! { <div class="app-banner" role="status">{text}</div> })}
            {move || ui.get().last_sync.map(|text| view! { <div class="app-banner app-banner--ok">{text}</div> })}
            {move || auth.get().message.map(|text| view! { <div class="app-banner app-banner--warn">{text}</div> })}
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LearningPathPage/>
                    <Route path=StaticSegment("learning") view=LearningPathPage/>
                    <Route path=StaticSegment("feedback") view=FeedbackPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("feedback")) view=FeedbackHub/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                    <Route path=(StaticSegment("terms"), ParamSegment("id")) view=TermDetailPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
