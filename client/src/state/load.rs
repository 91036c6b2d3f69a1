//! Async fetch outcome as seen by a page.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::fmt;

/// Idle before any request, then loading, then failed or ready.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    /// Settle a finished request; the error's `Display` becomes the message.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Replace any failure text with a fixed user-facing message.
    #[must_use]
    pub fn with_failure_message(self, message: &str) -> Self {
        match self {
            Self::Failed(_) => Self::Failed(message.to_owned()),
            other => other,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}
