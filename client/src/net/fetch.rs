//! Generic JSON fetch wrapper.
//!
//! One best-effort request per call: no retry, no timeout, no cancellation.
//! Non-2xx responses become [`FetchError::Status`] carrying the numeric status
//! and the raw body text, so callers can pattern-match instead of catching.
//!
//! Client-side (hydrate): `gloo-net` over the browser fetch API.
//! Native (SSR, tests): `reqwest`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Errors produced by [`fetch_data`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}, message: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No HTTP backend is compiled into this build.
    #[error("HTTP requests are not available in this build")]
    Unavailable,
}

impl FetchError {
    /// HTTP status for [`FetchError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Caller-supplied request shape: method, extra headers and optional JSON body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl FetchOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// `POST` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Encode`] if `body` cannot be represented as JSON.
    pub fn post_json<B: Serialize + ?Sized>(body: &B) -> FetchResult<Self> {
        let body = serde_json::to_value(body).map_err(|e| FetchError::Encode(e.to_string()))?;
        Ok(Self { method: Method::Post, headers: Vec::new(), body: Some(body) })
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Issue one request and decode the JSON response body as `T`.
///
/// # Errors
///
/// - [`FetchError::Status`] for any non-2xx status,
/// - [`FetchError::Network`] when no response arrives,
/// - [`FetchError::Decode`] when a 2xx body does not match `T`.
pub async fn fetch_data<T: DeserializeOwned>(url: &str, options: &FetchOptions) -> FetchResult<T> {
    let result = match send(url, options).await {
        Ok((status, body)) => decode_response(status, &body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log::warn!("{} {url} failed: {e}", options.method.as_str());
    }
    result
}

/// Map a raw status + body into the typed result.
///
/// An empty 2xx body decodes as JSON `null`, so `()` and `Option<T>` targets
/// accept `204 No Content`.
pub(crate) fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> FetchResult<T> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { status, body: body.to_owned() });
    }
    if body.trim().is_empty() {
        return serde_json::from_value(Value::Null).map_err(|e| FetchError::Decode(e.to_string()));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send(url: &str, options: &FetchOptions) -> FetchResult<(u16, String)> {
    use gloo_net::http::Request;

    let mut builder = match options.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    for (name, value) in &options.headers {
        builder = builder.header(name, value);
    }
    let request = match &options.body {
        Some(body) => builder.json(body).map_err(|e| FetchError::Encode(e.to_string()))?,
        None => builder.build().map_err(|e| FetchError::Network(e.to_string()))?,
    };
    let resp = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
async fn send(url: &str, options: &FetchOptions) -> FetchResult<(u16, String)> {
    let client = reqwest::Client::new();
    let mut builder = match options.method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };
    for (name, value) in &options.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &options.body {
        builder = builder.json(body);
    }
    let resp = builder
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
    Ok((status, body))
}

#[cfg(all(not(feature = "hydrate"), target_arch = "wasm32"))]
async fn send(url: &str, options: &FetchOptions) -> FetchResult<(u16, String)> {
    let _ = (url, options);
    Err(FetchError::Unavailable)
}
