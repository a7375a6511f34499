use super::*;

fn comment(id: &str, parent: Option<&str>, content: &str) -> Comment {
    Comment {
        id: id.into(),
        term_id: "42".into(),
        user_id: Some("u1".into()),
        user_name: Some("Sipho".into()),
        content: content.into(),
        parent_id: parent.map(Into::into),
        created_at: "2024-06-01T09:00:00Z".into(),
        updated_at: None,
        upvotes: 0,
        downvotes: 0,
        user_vote: None,
        is_deleted: false,
        is_edited: false,
        replies: Vec::new(),
    }
}

fn loaded() -> CommentsState {
    let mut state = CommentsState::for_term("42");
    let mut root = comment("1", None, "Is this the standard term?");
    root.replies.push(comment("2", Some("1"), "Yes, per the 2019 list."));
    state.loaded(vec![root]);
    state
}

#[test]
fn reply_lands_under_nested_parent() {
    let mut state = loaded();
    state.reply_to = Some("2".into());
    state.posted(comment("3", Some("2"), "Thanks")).unwrap();

    assert_eq!(state.count(), 3);
    assert_eq!(state.thread[0].replies[0].replies[0].id, "3");
    assert!(state.reply_to.is_none());
}

#[test]
fn reply_to_missing_parent_is_an_error() {
    let mut state = loaded();
    let err = state.posted(comment("3", Some("99"), "orphan")).unwrap_err();
    assert_eq!(err, RecordError::CommentNotFound("99".into()));
}

#[test]
fn edit_and_delete_update_in_place() {
    let mut state = loaded();
    state.editing = Some("2".into());
    state.edited("2", "Yes, per the 2021 list.").unwrap();
    assert!(state.thread[0].replies[0].is_edited);
    assert!(state.editing.is_none());

    state.deleted("1").unwrap();
    assert!(state.thread[0].is_deleted);
    assert_eq!(state.thread[0].replies.len(), 1);
    assert_eq!(state.count_label(), "2 comments");
}

#[test]
fn voting_twice_restores_counts() {
    let mut state = loaded();
    assert_eq!(state.vote("2", Vote::Upvote).unwrap(), Some(Vote::Upvote));
    assert_eq!(state.thread[0].replies[0].upvotes, 1);
    assert_eq!(state.vote("2", Vote::Upvote).unwrap(), None);
    assert_eq!(state.thread[0].replies[0].upvotes, 0);
}

#[test]
fn reconcile_takes_server_tallies() {
    let mut state = loaded();
    state.vote("1", Vote::Downvote).unwrap();
    state.reconcile("1", &VoteSummary { upvotes: 4, downvotes: 1, user_vote: Some(Vote::Downvote) });
    assert_eq!(state.thread[0].upvotes, 4);
    assert_eq!(state.thread[0].score(), 3);
}

#[test]
fn rejected_vote_rolls_back_to_snapshot() {
    let mut state = loaded();
    state.thread[0].upvotes = 2;
    state.thread[0].user_vote = Some(Vote::Upvote);
    let before = state.tallies("1").unwrap();

    state.vote("1", Vote::Downvote).unwrap();
    assert_eq!(state.thread[0].user_vote, Some(Vote::Downvote));
    assert_eq!(state.thread[0].upvotes, 1);

    state.reconcile("1", &before);
    assert_eq!(state.thread[0].upvotes, 2);
    assert_eq!(state.thread[0].downvotes, 0);
    assert_eq!(state.thread[0].user_vote, Some(Vote::Upvote));
}

#[test]
fn tallies_of_unknown_comment_is_none() {
    assert!(loaded().tallies("99").is_none());
}
