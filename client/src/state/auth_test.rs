use super::*;
use records::UserRole;

fn user(role: UserRole) -> User {
    User {
        id: "1".into(),
        email: "thandi@example.org".into(),
        first_name: Some("Thandi".into()),
        last_name: None,
        role,
        is_active: true,
        profile_pic_url: None,
    }
}

#[test]
fn restore_without_token_is_signed_out() {
    let state = AuthState::restore();
    assert!(!state.is_signed_in());
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn admin_role_is_required_for_admin() {
    let mut state = AuthState { token: Some("t".into()), ..AuthState::default() };
    state.signed_in(user(UserRole::Linguist));
    assert!(!state.is_admin());
    state.signed_in(user(UserRole::Admin));
    assert!(state.is_admin());
}

#[test]
fn expire_clears_identity_and_sets_message() {
    let mut state = AuthState { token: Some("t".into()), ..AuthState::default() };
    state.signed_in(user(UserRole::Admin));
    state.expire();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
    assert_eq!(state.message.as_deref(), Some("Your session has expired. Please log in again."));
}

#[test]
fn absorb_expires_only_on_auth_rejection() {
    let mut state = AuthState { token: Some("t".into()), ..AuthState::default() };
    assert!(!state.absorb(&ApiError::Network("TypeError: Failed to fetch".into())));
    assert!(!state.absorb(&ApiError::Http { status: 500, message: "boom".into() }));
    assert!(state.is_signed_in());

    assert!(state.absorb(&ApiError::Unauthorized { status: 403 }));
    assert!(!state.is_signed_in());
    assert_eq!(state.message.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
}
