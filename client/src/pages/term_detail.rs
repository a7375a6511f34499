//! Term discussion page with nested comments and votes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Comments are readable anonymously. Posting and voting need a session and
//! a connection, so a failed post keeps its draft and a failed vote is rolled
//! back. Edits and deletes go through the offline queue so they survive a
//! dropped connection and show immediately either way.

#[cfg(test)]
#[path = "term_detail_test.rs"]
mod term_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::CommentCreate;

use crate::components::comment_item::{CommentActions, CommentItem};
use crate::components::error_banner::ErrorBanner;
use crate::state::auth::AuthState;
use crate::state::comments::CommentsState;
use crate::state::ui::UiState;

/// Build a comment body, or `None` when the text is blank.
#[must_use]
pub fn new_comment(term_id: &str, content: &str, parent_id: Option<String>) -> Option<CommentCreate> {
    let content = content.trim();
    (!content.is_empty()).then(|| CommentCreate { term_id: term_id.to_owned(), content: content.to_owned(), parent_id })
}

fn load(auth: RwSignal<AuthState>, comments: RwSignal<CommentsState>, term_id: String) {
    comments.set(CommentsState::for_term(&term_id));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        let transport = crate::net::http::FetchTransport;
        match crate::net::terms::comments(&transport, token.as_deref(), &term_id).await {
            Ok(thread) => comments.update(|c| c.loaded(thread)),
            Err(e) => {
                let message = crate::app::report_failure(auth, &e);
                comments.update(|c| {
                    c.loading = false;
                    c.error = Some(message);
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Post a comment. `draft` is cleared only once the server has accepted it.
fn post(
    auth: RwSignal<AuthState>,
    comments: RwSignal<CommentsState>,
    payload: CommentCreate,
    draft: Option<RwSignal<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            let transport = crate::net::http::FetchTransport;
            let result = crate::net::terms::post_comment(&transport, &token, &payload).await;
            if result.is_ok() {
                if let Some(draft) = draft {
                    draft.set(String::new());
                }
            }
            comments.update(|c| match result {
                Ok(created) => {
                    c.error = None;
                    if let Err(e) = c.posted(created) {
                        c.error = Some(e.to_string());
                    }
                }
                Err(e) => c.error = Some(crate::app::report_failure(auth, &e)),
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, comments, payload, draft);
    }
}

/// Edit or delete through the offline queue; `content` is `None` for delete.
fn change(
    auth: RwSignal<AuthState>,
    comments: RwSignal<CommentsState>,
    ui: RwSignal<UiState>,
    id: String,
    content: Option<String>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::offline::flows::{delete_comment, edit_comment};

        let token = auth.get_untracked().token;
        let queue = crate::offline::browser_queue();
        let online = crate::util::connectivity::is_online();
        let transport = crate::net::http::FetchTransport;
        let result = match &content {
            Some(text) => edit_comment(&transport, &queue, online, token.as_deref(), &id, text).await,
            None => delete_comment(&transport, &queue, online, token.as_deref(), &id).await,
        };
        match result {
            Ok(outcome) => {
                comments.update(|c| {
                    let applied = match &content {
                        Some(text) => c.edited(&id, text),
                        None => c.deleted(&id),
                    };
                    if let Err(e) = applied {
                        leptos::logging::warn!("local comment update skipped: {e}");
                    }
                });
                if outcome.is_queued() {
                    crate::app::refresh_pending(ui).await;
                }
            }
            Err(e) => {
                let message = crate::app::report_submit_failure(auth, &e);
                comments.update(|c| c.error = Some(message));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, comments, ui, id, content);
    }
}

fn vote(auth: RwSignal<AuthState>, comments: RwSignal<CommentsState>, id: String, choice: records::Vote) {
    if auth.get_untracked().token.is_none() {
        comments.update(|c| c.error = Some("Sign in to vote.".to_owned()));
        return;
    }
    let mut before = None;
    comments.update(|c| {
        before = c.tallies(&id);
        if let Err(e) = c.vote(&id, choice) {
            c.error = Some(e.to_string());
        }
    });
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = auth.get_untracked().token else {
            return;
        };
        leptos::task::spawn_local(async move {
            let transport = crate::net::http::FetchTransport;
            match crate::net::terms::vote(&transport, &token, &id, choice).await {
                Ok(summary) => comments.update(|c| c.reconcile(&id, &summary)),
                Err(e) => {
                    let message = crate::app::report_failure(auth, &e);
                    comments.update(|c| {
                        if let Some(before) = &before {
                            c.reconcile(&id, before);
                        }
                        c.error = Some(message);
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = before;
    }
}

#[component]
pub fn TermDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let comments = expect_context::<RwSignal<CommentsState>>();
    let params = use_params_map();
    let term_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    Effect::new(move || load(auth, comments, term_id.get()));

    let actions = CommentActions {
        reply: Callback::new(move |(parent, content): (String, String)| {
            if let Some(payload) = new_comment(&term_id.get_untracked(), &content, Some(parent)) {
                post(auth, comments, payload, None);
            }
        }),
        edit: Callback::new(move |(id, content): (String, String)| change(auth, comments, ui, id, Some(content))),
        delete: Callback::new(move |id: String| change(auth, comments, ui, id, None)),
        vote: Callback::new(move |(id, choice): (String, records::Vote)| vote(auth, comments, id, choice)),
    };
    let on_retry = Callback::new(move |()| load(auth, comments, term_id.get_untracked()));

    let draft = RwSignal::new(String::new());
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(payload) = new_comment(&term_id.get_untracked(), &draft.get_untracked(), None) {
            post(auth, comments, payload, Some(draft));
        }
    };

    let thread = Memo::new(move |_| comments.with(|c| c.thread.clone()));
    let viewer = move || auth.with(|a| a.user.as_ref().map(|u| u.id.clone()));

    view! {
        <section class="term-page">
            <h1>{move || format!("Term {}", term_id.get())}</h1>
            <h2 class="term-page__count">{move || comments.with(CommentsState::count_label)}</h2>
            {move || comments.get().error.map(|message| view! { <ErrorBanner message=message on_retry=on_retry /> })}
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| view! { <p class="term-page__signin">"Sign in to join the discussion."</p> }
            >
                <form class="term-page__new" on:submit=on_submit>
                    <textarea
                        placeholder="Add a comment..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || draft.get().trim().is_empty()>
                        "Post"
                    </button>
                </form>
            </Show>
            <Show when=move || !comments.get().loading fallback=|| view! { <p>"Loading comments..."</p> }>
                <div class="term-page__thread">
                    {move || {
                        let viewer_id = viewer();
                        thread
                            .get()
                            .into_iter()
                            .map(|comment| {
                                view! { <CommentItem comment=comment actions=actions viewer_id=viewer_id.clone() /> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
