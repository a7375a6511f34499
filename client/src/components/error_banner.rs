//! Inline error message with an optional manual retry.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span class="error-banner__message">{message}</span>
            {on_retry.map(|retry| {
                view! {
                    <button class="btn error-banner__retry" on:click=move |_| retry.run(())>
                        "Retry"
                    </button>
                }
            })}
        </div>
    }
}
