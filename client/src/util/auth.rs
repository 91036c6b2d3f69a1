//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root installs the session sync once; guarded pages install the
//! redirect so every route applies identical unauthenticated behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// True once the session lookup finished and found no session.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.has_session()
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Fetch the provider session and feed every new value into `auth`.
pub fn install_session_sync(auth: RwSignal<AuthState>) {
    let session = LocalResource::new(crate::net::api::fetch_session);
    Effect::new(move || {
        if let Some(current) = session.get() {
            auth.update(|state| {
                let transition = state.observe(current.as_ref());
                log::debug!("auth transition: {transition:?}");
            });
        }
    });
}
