use super::*;
use records::UserRole;

fn user() -> User {
    User {
        id: "5".into(),
        email: "lerato@example.org".into(),
        first_name: Some("Lerato".into()),
        last_name: None,
        role: UserRole::Contributor,
        is_active: true,
        profile_pic_url: None,
    }
}

#[test]
fn unchanged_form_produces_empty_update() {
    let update = profile_changes(&user(), " Lerato ", "", "lerato@example.org");
    assert_eq!(update, ProfileUpdate::default());
}

#[test]
fn only_changed_fields_are_sent() {
    let update = profile_changes(&user(), "Lerato", "Mokoena", "lerato@example.org");
    assert_eq!(update, ProfileUpdate { last_name: Some("Mokoena".into()), ..ProfileUpdate::default() });
}

#[test]
fn blank_email_is_ignored() {
    let update = profile_changes(&user(), "Lerato", "", "   ");
    assert!(update.email.is_none());
}
