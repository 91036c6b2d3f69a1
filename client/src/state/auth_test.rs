use super::*;
use crate::net::types::SessionUser;

fn session_with_role(role: Option<Role>) -> Session {
    Session {
        user: SessionUser { name: Some("Ada".into()), role, ..SessionUser::default() },
        expires: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_loading_without_session() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.has_session());
    assert_eq!(state.is_signed_in, None);
    assert_eq!(state.role, None);
}

// =============================================================
// observe(None)
// =============================================================

#[test]
fn observing_no_session_signs_out() {
    let mut state = AuthState::default();
    assert_eq!(state.observe(None), AuthTransition::SignedOut);
    assert_eq!(state.is_signed_in, Some(false));
    assert!(!state.loading);
}

#[test]
fn sign_out_keeps_previous_role() {
    let mut state = AuthState::default();
    state.observe(Some(&session_with_role(Some(Role::Teacher))));
    state.observe(None);
    assert_eq!(state.is_signed_in, Some(false));
    assert_eq!(state.role, Some(Role::Teacher));
    assert!(!state.has_session());
}

// =============================================================
// observe(Some)
// =============================================================

#[test]
fn observing_session_copies_role() {
    let mut state = AuthState::default();
    assert_eq!(state.observe(Some(&session_with_role(Some(Role::Student)))), AuthTransition::RoleObserved);
    assert_eq!(state.role, Some(Role::Student));
    assert!(state.has_session());
    assert!(!state.loading);
}

#[test]
fn observing_session_does_not_set_signed_in() {
    let mut state = AuthState::default();
    state.observe(Some(&session_with_role(Some(Role::Student))));
    assert_eq!(state.is_signed_in, None);
}

#[test]
fn signed_in_stays_false_after_sign_back_in() {
    let mut state = AuthState::default();
    state.observe(None);
    state.observe(Some(&session_with_role(Some(Role::Admin))));
    assert_eq!(state.is_signed_in, Some(false));
    assert_eq!(state.role, Some(Role::Admin));
}

#[test]
fn session_without_role_clears_role() {
    let mut state = AuthState::default();
    state.observe(Some(&session_with_role(Some(Role::Teacher))));
    state.observe(Some(&session_with_role(None)));
    assert_eq!(state.role, None);
}

#[test]
fn display_name_prefers_name_then_email() {
    let mut state = AuthState::default();
    assert_eq!(state.display_name(), None);

    state.observe(Some(&session_with_role(None)));
    assert_eq!(state.display_name(), Some("Ada"));

    let mut session = session_with_role(None);
    session.user.name = None;
    session.user.email = Some("ada@example.com".into());
    state.observe(Some(&session));
    assert_eq!(state.display_name(), Some("ada@example.com"));
}
