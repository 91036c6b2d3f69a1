//! API error type and its HTTP mapping.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::ErrorBody;
use client::schema::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Submitted payload failed schema validation.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Request is well-formed JSON but contradicts the route.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn body(self) -> ErrorBody {
        match self {
            Self::Validation(errors) => ErrorBody { errors: errors.errors, error: None },
            Self::BadRequest(message) => ErrorBody { errors: Vec::new(), error: Some(message) },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(%status, error = %self, "request rejected");
        (status, Json(self.body())).into_response()
    }
}
