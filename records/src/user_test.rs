use super::*;

fn user(first: Option<&str>, last: Option<&str>) -> User {
    User {
        id: "9".into(),
        email: "sipho@example.org".into(),
        first_name: first.map(Into::into),
        last_name: last.map(Into::into),
        role: UserRole::Linguist,
        is_active: true,
        profile_pic_url: None,
    }
}

#[test]
fn role_labels_are_human_readable() {
    assert_eq!(UserRole::Contributor.label(), "Contributor");
    assert_eq!(UserRole::Linguist.label(), "Linguist");
    assert_eq!(UserRole::Admin.label(), "Admin");
}

#[test]
fn role_label_matches_wire_role() {
    let parsed: User = serde_json::from_value(serde_json::json!({
        "id": 4,
        "email": "a@example.org",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(parsed.role.label(), "Admin");
    assert!(parsed.is_admin());
}

#[test]
fn display_name_falls_back_to_email() {
    assert_eq!(user(Some("Sipho"), Some(" Dlamini ")).display_name(), "Sipho Dlamini");
    assert_eq!(user(Some("  "), None).display_name(), "sipho@example.org");
}
