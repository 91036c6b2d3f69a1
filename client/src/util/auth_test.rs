use super::*;
use crate::net::types::{Role, Session, SessionUser};

#[test]
fn should_redirect_unauth_when_loaded_without_session() {
    let mut state = AuthState::default();
    state.observe(None);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let mut state = AuthState::default();
    let session = Session {
        user: SessionUser { role: Some(Role::Student), ..SessionUser::default() },
        expires: None,
    };
    state.observe(Some(&session));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn redirect_ignores_stale_signed_in_flag() {
    let mut state = AuthState::default();
    state.observe(None);
    state.observe(Some(&Session::default()));
    assert_eq!(state.is_signed_in, Some(false));
    assert!(!should_redirect_unauth(&state));
}
