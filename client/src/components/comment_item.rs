//! One comment with its replies, rendered recursively.
//!
//! DESIGN
//! ======
//! The component returns `AnyView` so it can nest itself for replies. Which
//! comment has an open reply or edit box lives in `CommentsState`, so only
//! one box is open across the whole thread.

use leptos::prelude::*;
use records::{Comment, Vote};

use crate::state::comments::CommentsState;

/// Deepest level that still indents; deeper replies render flat.
const MAX_INDENT: usize = 4;

/// Callbacks a thread hands to every comment.
#[derive(Clone, Copy)]
pub struct CommentActions {
    /// `(parent_id, content)`
    pub reply: Callback<(String, String)>,
    /// `(comment_id, content)`
    pub edit: Callback<(String, String)>,
    pub delete: Callback<String>,
    pub vote: Callback<(String, Vote)>,
}

#[component]
pub fn CommentItem(
    comment: Comment,
    actions: CommentActions,
    /// Signed-in user, for edit/delete on their own comments.
    viewer_id: Option<String>,
    #[prop(optional)] depth: usize,
) -> AnyView {
    let state = expect_context::<RwSignal<CommentsState>>();
    let draft = RwSignal::new(String::new());

    let id = StoredValue::new(comment.id.clone());
    let original = StoredValue::new(comment.content.clone());
    let own = !comment.is_deleted && viewer_id.is_some() && viewer_id == comment.user_id;
    let replying = Memo::new(move |_| state.with(|s| id.with_value(|id| s.reply_to.as_deref() == Some(id))));
    let editing = Memo::new(move |_| state.with(|s| id.with_value(|id| s.editing.as_deref() == Some(id))));

    let open_reply = move |_| {
        draft.set(String::new());
        state.update(|s| {
            s.editing = None;
            s.reply_to = Some(id.get_value());
        });
    };
    let open_edit = move |_| {
        draft.set(original.get_value());
        state.update(|s| {
            s.reply_to = None;
            s.editing = Some(id.get_value());
        });
    };
    let cancel = move |_| {
        state.update(|s| {
            s.reply_to = None;
            s.editing = None;
        });
    };
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get_untracked().trim().to_owned();
        if content.is_empty() {
            return;
        }
        if editing.get_untracked() {
            actions.edit.run((id.get_value(), content));
        } else {
            actions.reply.run((id.get_value(), content));
        }
    };
    let on_delete = move |_| actions.delete.run(id.get_value());
    let on_upvote = move |_| actions.vote.run((id.get_value(), Vote::Upvote));
    let on_downvote = move |_| actions.vote.run((id.get_value(), Vote::Downvote));

    let author = comment.user_name.clone().unwrap_or_else(|| "Anonymous".to_owned());
    let score = comment.score().to_string();
    let upvoted = comment.user_vote == Some(Vote::Upvote);
    let downvoted = comment.user_vote == Some(Vote::Downvote);
    let deleted = comment.is_deleted;
    let edited = comment.is_edited && !deleted;
    let indent = format!("--comment-depth: {}", depth.min(MAX_INDENT));
    let child_depth = depth + 1;
    let replies = comment
        .replies
        .into_iter()
        .map(|reply| {
            view! { <CommentItem comment=reply actions=actions viewer_id=viewer_id.clone() depth=child_depth /> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="comment" class:comment--deleted=deleted style=indent>
            <div class="comment__meta">
                <span class="comment__author">{author}</span>
                <span class="comment__date">{comment.created_at}</span>
                <Show when=move || edited>
                    <span class="comment__edited">"(edited)"</span>
                </Show>
            </div>
            <p class="comment__body">{comment.content}</p>
            <Show when=move || !deleted>
                <div class="comment__actions">
                    <button class="comment__vote" class:comment__vote--active=upvoted on:click=on_upvote aria-label="Upvote">
                        "▲"
                    </button>
                    <span class="comment__score">{score.clone()}</span>
                    <button
                        class="comment__vote"
                        class:comment__vote--active=downvoted
                        on:click=on_downvote
                        aria-label="Downvote"
                    >
                        "▼"
                    </button>
                    <button class="comment__reply" on:click=open_reply>
                        "Reply"
                    </button>
                    <Show when=move || own>
                        <button class="comment__edit" on:click=open_edit>
                            "Edit"
                        </button>
                        <button class="comment__delete" on:click=on_delete>
                            "Delete"
                        </button>
                    </Show>
                </div>
            </Show>
            <Show when=move || replying.get() || editing.get()>
                <form class="comment__form" on:submit=submit>
                    <textarea
                        class="comment__input"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || draft.get().trim().is_empty()>
                        {move || if replying.get() { "Reply" } else { "Save" }}
                    </button>
                    <button class="btn" type="button" on:click=cancel>
                        "Cancel"
                    </button>
                </form>
            </Show>
            <div class="comment__replies">{replies}</div>
        </div>
    }
    .into_any()
}
