//! Sign-in page: username + password checked locally, then sent to the
//! session provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use serde_json::{Value, json};

use crate::components::auth_header::AuthHeader;
use crate::components::field_message::FieldMessage;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::fetch::FetchError;
use crate::schema::{LoginSchema, Schema};

pub(crate) fn login_input(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn sign_in_failure_message(err: &FetchError) -> String {
    match err.status() {
        Some(401 | 403) => "Invalid username or password.".to_owned(),
        _ => format!("Sign-in failed: {err}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(BTreeMap::<String, String>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match LoginSchema::validate(&login_input(&username.get(), &password.get())) {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e.field_map());
                return;
            }
        };
        errors.set(BTreeMap::new());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&credentials).await {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/dashboard");
                    }
                }
                Err(e) => {
                    info.set(sign_in_failure_message(&e));
                    busy.set(false);
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <AuthHeader/>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <FieldMessage errors=errors path="username"/>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FieldMessage errors=errors path="password"/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a class="login-link" href="/new-password">"Forgot password?"</a>
            </div>
        </div>
    }
}
