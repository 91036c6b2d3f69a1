//! Session-derived auth state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself belongs to the external provider. This module only
//! projects each observed session into a signed-in flag and a role, and
//! route guards read the projection from context.
//!
//! TRANSITIONS
//! ===========
//! `observe(None)`    -> `is_signed_in = Some(false)`, `role` unchanged.
//! `observe(Some(s))` -> `role = s.user.role`, `is_signed_in` unchanged.
//!
//! Neither branch completes the other's field: a sign-out keeps the last
//! role, and a present session never sets `is_signed_in` to `true`. Callers
//! that need "is there a session right now" use [`AuthState::has_session`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, Session};

/// Which branch the last observation took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthTransition {
    /// No session: the signed-in flag was cleared.
    SignedOut,
    /// Session present: the role was copied from it.
    RoleObserved,
}

/// Authentication state tracking the observed session and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Last observed session, if any.
    pub session: Option<Session>,
    /// True until the first session lookup completes.
    pub loading: bool,
    /// `None` until a signed-out observation.
    pub is_signed_in: Option<bool>,
    pub role: Option<Role>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true, is_signed_in: None, role: None }
    }
}

impl AuthState {
    /// Apply one session observation.
    pub fn observe(&mut self, session: Option<&Session>) -> AuthTransition {
        self.loading = false;
        self.session = session.cloned();
        match session {
            None => {
                self.is_signed_in = Some(false);
                AuthTransition::SignedOut
            }
            Some(session) => {
                self.role.clone_from(&session.user.role);
                AuthTransition::RoleObserved
            }
        }
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Display name for greetings, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        let user = &self.session.as_ref()?.user;
        user.name.as_deref().or(user.email.as_deref())
    }
}
