use super::*;

#[test]
fn blank_comment_is_rejected() {
    assert_eq!(new_comment("42", "   ", None), None);
}

#[test]
fn reply_keeps_parent_and_trims() {
    let payload = new_comment("42", "  Agreed  ", Some("7".into())).unwrap();
    assert_eq!(payload, CommentCreate { term_id: "42".into(), content: "Agreed".into(), parent_id: Some("7".into()) });
}
