//! Password reset page reached from the emailed link (`/new-password?token=...`).

#[cfg(test)]
#[path = "new_password_test.rs"]
mod new_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::auth_header::AuthHeader;
use crate::schema::login::password_error;
use crate::state::load::LoadState;

pub const MISSING_TOKEN_MESSAGE: &str = "This reset link is missing its token. Request a new one.";

/// Local checks before submitting: length rule, then confirmation match.
pub(crate) fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if let Some(message) = password_error(password) {
        return Err(message);
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Non-empty token from the query string.
pub(crate) fn reset_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// What the page shows for the current token and submission state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResetView {
    MissingToken,
    Form,
    Saving,
    Done,
}

pub(crate) fn reset_view(token: Option<&str>, status: &LoadState<()>) -> ResetView {
    match status {
        LoadState::Ready(()) => ResetView::Done,
        _ if token.is_none() => ResetView::MissingToken,
        LoadState::Loading => ResetView::Saving,
        LoadState::Idle | LoadState::Failed(_) => ResetView::Form,
    }
}

#[component]
pub fn NewPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let token = move || reset_token(query.with(|q| q.get("token")));

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let status = RwSignal::new(LoadState::<()>::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with(LoadState::is_loading) {
            return;
        }
        if let Err(message) = validate_new_password(&password.get(), &confirm.get()) {
            form_error.set(Some(message));
            return;
        }
        form_error.set(None);
        let Some(token) = token() else {
            status.set(LoadState::Failed(MISSING_TOKEN_MESSAGE.to_owned()));
            return;
        };
        status.set(LoadState::Loading);

        #[cfg(feature = "hydrate")]
        {
            let new_password = password.get();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::reset_password(&token, &new_password).await;
                status.set(LoadState::from_result(result.map(|_| ())));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <AuthHeader/>
                <h1 class="login-card__title">"Choose a new password"</h1>
                {move || {
                    let state = status.get();
                    match reset_view(token().as_deref(), &state) {
                        ResetView::Done => view! {
                            <div class="new-password__done">
                                <p class="login-message">"Your password has been updated."</p>
                                <a class="login-button" href="/login">"Back to sign in"</a>
                            </div>
                        }
                            .into_any(),
                        ResetView::MissingToken => view! {
                            <div class="new-password__missing">
                                <p class="login-message login-message--error">{MISSING_TOKEN_MESSAGE}</p>
                                <a class="login-button" href="/login">"Back to sign in"</a>
                            </div>
                        }
                            .into_any(),
                        ResetView::Saving => view! { <p class="login-message">"Saving new password..."</p> }.into_any(),
                        ResetView::Form => view! {
                            <form class="login-form" on:submit=on_submit>
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="New password"
                                    autocomplete="new-password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Confirm password"
                                    autocomplete="new-password"
                                    prop:value=move || confirm.get()
                                    on:input=move |ev| confirm.set(event_target_value(&ev))
                                />
                                <Show when=move || form_error.get().is_some()>
                                    <p class="field-message" role="alert">{move || form_error.get().unwrap_or_default()}</p>
                                </Show>
                                {state
                                    .error()
                                    .map(|message| view! { <p class="login-message login-message--error">{message.to_owned()}</p> })}
                                <button class="login-button" type="submit">"Update password"</button>
                            </form>
                        }
                            .into_any(),
                    }
                }}
            </div>
        </div>
    }
}
