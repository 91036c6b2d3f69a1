//! OpenAPI document served to the API docs page.
//!
//! Component schemas come from each form schema's `openapi()` fragment; the
//! schema tests check those fragments against what `validate()` enforces.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use axum::extract::State;
use axum::response::Json;
use client::schema::{CustomQuestionSchema, LoginSchema, Schema, SchoolSchema};
use serde_json::{Map, Value, json};

use crate::state::AppState;

pub const OPENAPI_VERSION: &str = "3.0.3";

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_content(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn validation_failed() -> Value {
    json!({ "description": "Validation failed", "content": json_content(schema_ref("ValidationErrors")) })
}

fn record_schema(base: &str) -> Value {
    json!({
        "allOf": [schema_ref(base), { "type": "object", "properties": { "id": { "type": "string" } } }]
    })
}

fn component_schemas() -> Map<String, Value> {
    let mut schemas = Map::new();
    schemas.insert(LoginSchema::NAME.to_owned(), LoginSchema::openapi());
    schemas.insert(SchoolSchema::NAME.to_owned(), SchoolSchema::openapi());
    schemas.insert(CustomQuestionSchema::NAME.to_owned(), CustomQuestionSchema::openapi());
    schemas.insert("SchoolRecord".to_owned(), record_schema(SchoolSchema::NAME));
    schemas.insert("QuestionRecord".to_owned(), record_schema(CustomQuestionSchema::NAME));
    schemas.insert(
        "ValidationErrors".to_owned(),
        json!({
            "type": "object",
            "properties": {
                "errors": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": { "path": { "type": "string" }, "message": { "type": "string" } }
                    }
                }
            }
        }),
    );
    schemas
}

/// Build the OpenAPI document for this server.
pub(crate) fn openapi_document(title: &str) -> Value {
    let test_id_param = json!({
        "name": "test_id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    });

    json!({
        "openapi": OPENAPI_VERSION,
        "info": { "title": title, "version": env!("CARGO_PKG_VERSION") },
        "paths": {
            "/api/docs": {
                "get": {
                    "summary": "This OpenAPI document",
                    "responses": { "200": { "description": "OpenAPI document" } }
                }
            },
            "/api/schools": {
                "get": {
                    "summary": "List registered schools",
                    "responses": {
                        "200": {
                            "description": "Schools in submission order",
                            "content": json_content(json!({ "type": "array", "items": schema_ref("SchoolRecord") }))
                        }
                    }
                },
                "post": {
                    "summary": "Register a school",
                    "requestBody": { "required": true, "content": json_content(schema_ref(SchoolSchema::NAME)) },
                    "responses": {
                        "201": { "description": "Stored school", "content": json_content(schema_ref("SchoolRecord")) },
                        "422": validation_failed()
                    }
                }
            },
            "/api/tests/{test_id}/questions": {
                "get": {
                    "summary": "List questions for a test",
                    "parameters": [test_id_param.clone()],
                    "responses": {
                        "200": {
                            "description": "Questions in submission order",
                            "content": json_content(json!({ "type": "array", "items": schema_ref("QuestionRecord") }))
                        }
                    }
                },
                "post": {
                    "summary": "Add a custom question to a test",
                    "parameters": [test_id_param],
                    "requestBody": { "required": true, "content": json_content(schema_ref(CustomQuestionSchema::NAME)) },
                    "responses": {
                        "201": { "description": "Stored question", "content": json_content(schema_ref("QuestionRecord")) },
                        "400": { "description": "fk_test_id does not match the path" },
                        "422": validation_failed()
                    }
                }
            },
            "/api/auth/callback/credentials": {
                "post": {
                    "summary": "Sign in with username and password (session provider)",
                    "requestBody": { "required": true, "content": json_content(schema_ref(LoginSchema::NAME)) },
                    "responses": { "200": { "description": "Signed in" }, "401": { "description": "Rejected" } }
                }
            },
            "/healthz": {
                "get": { "summary": "Liveness probe", "responses": { "200": { "description": "OK" } } }
            }
        },
        "components": { "schemas": component_schemas() }
    })
}

/// `GET /api/docs`: OpenAPI document.
pub async fn api_docs(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config.api_title))
}
