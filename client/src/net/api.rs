//! REST helpers for the app server and the external session provider.
//!
//! Every helper is a thin call into [`fetch_data`] so failure handling stays
//! uniform. Session lookups degrade to `None` instead of surfacing errors, so
//! a provider outage reads as "signed out" rather than breaking rendering.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde_json::{Value, json};

use super::fetch::{FetchOptions, FetchResult, fetch_data};
use super::types::{QuestionRecord, SchoolRecord, Session};
use crate::schema::{Credentials, CustomQuestion, School};

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const CREDENTIALS_SIGN_IN_ENDPOINT: &str = "/api/auth/callback/credentials";
pub const RESET_PASSWORD_ENDPOINT: &str = "/api/auth/reset-password";
pub const API_DOCS_ENDPOINT: &str = "/api/docs";
pub const SCHOOLS_ENDPOINT: &str = "/api/schools";

/// Bytes escaped in a single path segment (RFC 3986 `pchar` complement, plus `%`).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Questions collection for one test; `test_id` is user-typed, so it is
/// encoded as one path segment.
pub(crate) fn questions_endpoint(test_id: &str) -> String {
    format!("/api/tests/{}/questions", utf8_percent_encode(test_id, PATH_SEGMENT))
}

/// Interpret the provider's session payload. `null` and `{}` mean signed out.
pub(crate) fn session_from_value(value: Value) -> Option<Session> {
    match &value {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        _ => serde_json::from_value(value).ok(),
    }
}

/// Fetch the current session. Returns `None` when signed out or on failure.
pub async fn fetch_session() -> Option<Session> {
    match fetch_data::<Value>(SESSION_ENDPOINT, &FetchOptions::get()).await {
        Ok(value) => session_from_value(value),
        Err(e) => {
            log::debug!("session lookup failed: {e}");
            None
        }
    }
}

/// Submit validated credentials to the session provider.
///
/// # Errors
///
/// Propagates any [`FetchError`](super::fetch::FetchError) from the provider.
pub async fn sign_in(credentials: &Credentials) -> FetchResult<Value> {
    let opts = FetchOptions::post_json(credentials)?;
    fetch_data(CREDENTIALS_SIGN_IN_ENDPOINT, &opts).await
}

pub(crate) fn reset_password_body(token: &str, password: &str) -> Value {
    json!({ "token": token, "password": password })
}

/// Set a new password using a reset token from the emailed link.
///
/// # Errors
///
/// Propagates any [`FetchError`](super::fetch::FetchError) from the provider.
pub async fn reset_password(token: &str, password: &str) -> FetchResult<Value> {
    let opts = FetchOptions::post_json(&reset_password_body(token, password))?;
    fetch_data(RESET_PASSWORD_ENDPOINT, &opts).await
}

/// Fetch the OpenAPI document rendered by the docs page.
///
/// # Errors
///
/// Propagates any [`FetchError`](super::fetch::FetchError).
pub async fn fetch_api_docs() -> FetchResult<Value> {
    fetch_data(API_DOCS_ENDPOINT, &FetchOptions::get()).await
}

/// # Errors
///
/// Propagates any [`FetchError`](super::fetch::FetchError); a 422 carries the
/// server's field errors in its body.
pub async fn create_school(school: &School) -> FetchResult<SchoolRecord> {
    let opts = FetchOptions::post_json(school)?;
    fetch_data(SCHOOLS_ENDPOINT, &opts).await
}

/// # Errors
///
/// Propagates any [`FetchError`](super::fetch::FetchError).
pub async fn list_questions(test_id: &str) -> FetchResult<Vec<QuestionRecord>> {
    fetch_data(&questions_endpoint(test_id), &FetchOptions::get()).await
}

/// # Errors
///
/// Propagates any [`FetchError`](super::fetch::FetchError); a 422 carries the
/// server's field errors in its body.
pub async fn create_question(question: &CustomQuestion) -> FetchResult<QuestionRecord> {
    let opts = FetchOptions::post_json(question)?;
    fetch_data(&questions_endpoint(&question.fk_test_id), &opts).await
}
