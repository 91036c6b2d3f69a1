//! School registration routes.

#[cfg(test)]
#[path = "schools_test.rs"]
mod schools_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::SchoolRecord;
use client::schema::{Schema, SchoolSchema};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/schools`: list schools in submission order.
pub async fn list_schools(State(state): State<AppState>) -> Json<Vec<SchoolRecord>> {
    Json(state.list_schools().await)
}

/// `POST /api/schools`: validate and store a school.
pub async fn create_school(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SchoolRecord>), ApiError> {
    let school = SchoolSchema::validate(&body)?;
    let record = state.insert_school(school).await;
    tracing::info!(school_id = %record.id, name = %record.school.name, "school registered");
    Ok((StatusCode::CREATED, Json(record)))
}
