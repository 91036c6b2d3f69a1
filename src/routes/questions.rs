//! Custom question routes, scoped to a test.

#[cfg(test)]
#[path = "questions_test.rs"]
mod questions_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::QuestionRecord;
use client::schema::{CustomQuestionSchema, Schema};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/tests/:test_id/questions`: list a test's questions.
pub async fn list_questions(
    State(state): State<AppState>,
    Path(test_id): Path<String>,
) -> Json<Vec<QuestionRecord>> {
    Json(state.list_questions(&test_id).await)
}

/// `POST /api/tests/:test_id/questions`: validate and store a question.
///
/// The body's `fk_test_id` must name the same test as the path.
pub async fn create_question(
    State(state): State<AppState>,
    Path(test_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<QuestionRecord>), ApiError> {
    let question = CustomQuestionSchema::validate(&body)?;
    if question.fk_test_id != test_id {
        return Err(ApiError::BadRequest(format!(
            "fk_test_id {:?} does not match test {test_id:?}",
            question.fk_test_id
        )));
    }
    let record = state.insert_question(question).await;
    tracing::info!(
        question_id = %record.id,
        test_id = %record.question.fk_test_id,
        question_type = %record.question.question_type,
        marks = record.question.marks,
        "question added"
    );
    Ok((StatusCode::CREATED, Json(record)))
}
