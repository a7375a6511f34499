//! Public feedback form.
//!
//! Anyone can submit; a signed-in user's token is attached when present.
//! Offline submissions are queued and reported as sent.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;
use records::FeedbackType;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::ui::UiState;
use crate::util::session::QUEUED_MESSAGE;
use crate::util::triage::parse_select;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your feedback!";

/// Submit is enabled once the message has non-whitespace content.
#[must_use]
pub fn can_submit(message: &str, submitting: bool) -> bool {
    !submitting && !message.trim().is_empty()
}

#[must_use]
pub fn confirmation(queued: bool) -> &'static str {
    if queued { QUEUED_MESSAGE } else { THANK_YOU_MESSAGE }
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let ui = expect_context::<RwSignal<UiState>>();

    let kind = RwSignal::new(FeedbackType::Suggestion);
    let message = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let sent = RwSignal::new(None::<bool>);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = records::FeedbackCreate::from_form(
            kind.get_untracked(),
            &message.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
        ) else {
            return;
        };
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::http::FetchTransport;
            use crate::offline::flows::{Submission, submit_feedback};

            leptos::task::spawn_local(async move {
                let token = auth.get_untracked().token;
                let queue = crate::offline::browser_queue();
                let online = crate::util::connectivity::is_online();
                let result = submit_feedback(&FetchTransport, &queue, online, token.as_deref(), payload).await;
                submitting.set(false);
                match result {
                    Ok(Submission::Sent(_)) => sent.set(Some(false)),
                    Ok(Submission::Queued(_)) => {
                        sent.set(Some(true));
                        crate::app::refresh_pending(ui).await;
                    }
                    Err(e) => error.set(Some(crate::app::report_submit_failure(auth, &e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            submitting.set(false);
        }
    };

    let reset = move |_| {
        message.set(String::new());
        sent.set(None);
    };

    view! {
        <section class="feedback-page">
            <h1>"Share your feedback"</h1>
            <Show
                when=move || sent.get().is_none()
                fallback=move || {
                    view! {
                        <div class="feedback-page__success" role="status">
                            <p>{move || confirmation(sent.get().unwrap_or(false))}</p>
                            <button class="btn" on:click=reset>"Send more feedback"</button>
                        </div>
                    }
                }
            >
                <form class="feedback-page__form" on:submit=on_submit>
                    <fieldset class="feedback-page__types">
                        <legend>"Type"</legend>
                        {FeedbackType::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        type="button"
                                        class="feedback-page__type"
                                        class:feedback-page__type--active=move || kind.get() == t
                                        on:click=move |_| kind.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>
                    <select
                        class="feedback-page__type-select"
                        aria-label="Feedback type"
                        prop:value=move || kind.get().as_str()
                        on:change=move |ev| {
                            if let Some(t) = parse_select::<FeedbackType>(&event_target_value(&ev)) {
                                kind.set(t);
                            }
                        }
                    >
                        {FeedbackType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <label class="feedback-page__field">
                        "Message"
                        <textarea
                            required=true
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="feedback-page__field">
                        "Name (optional)"
                        <input type="text" prop:value=move || name.get() on:input=move |ev| name.set(event_target_value(&ev)) />
                    </label>
                    <label class="feedback-page__field">
                        "Email (optional)"
                        <input type="email" prop:value=move || email.get() on:input=move |ev| email.set(event_target_value(&ev)) />
                    </label>
                    {move || error.get().map(|message| view! { <p class="feedback-page__error" role="alert">{message}</p> })}
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || !can_submit(&message.get(), submitting.get())
                    >
                        {move || if submitting.get() { "Sending..." } else { "Submit feedback" }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
