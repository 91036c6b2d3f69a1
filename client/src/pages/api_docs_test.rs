use super::*;
use serde_json::json;

#[test]
fn summarize_orders_by_path_then_method() {
    let spec = json!({
        "openapi": "3.0.3",
        "info": { "title": "School Testing API", "version": "0.1.0" },
        "paths": {
            "/api/schools": {
                "post": { "summary": "Create a school" },
                "get": { "summary": "List schools" }
            },
            "/api/docs": {
                "get": { "description": "This document" }
            }
        }
    });
    let summary = summarize_spec(&spec);
    assert_eq!(summary.title, "School Testing API");
    assert_eq!(summary.version, "0.1.0");
    let rows: Vec<(&str, &str, &str)> = summary
        .operations
        .iter()
        .map(|op| (op.method.as_str(), op.path.as_str(), op.summary.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("GET", "/api/docs", "This document"),
            ("GET", "/api/schools", "List schools"),
            ("POST", "/api/schools", "Create a school"),
        ]
    );
}

#[test]
fn summarize_tolerates_missing_sections() {
    let summary = summarize_spec(&json!({}));
    assert_eq!(summary.title, "API");
    assert!(summary.version.is_empty());
    assert!(summary.operations.is_empty());
}

#[test]
fn summarize_skips_non_operation_keys() {
    let spec = json!({ "paths": { "/x": { "parameters": [], "get": {} } } });
    let summary = summarize_spec(&spec);
    assert_eq!(summary.operations.len(), 1);
    assert_eq!(summary.operations[0].summary, "");
}

#[test]
fn failed_fetch_shows_fixed_message() {
    let result: Result<DocSummary, crate::net::fetch::FetchError> =
        Err(crate::net::fetch::FetchError::Status { status: 500, body: "boom".into() });
    let state = LoadState::from_result(result).with_failure_message(LOAD_FAILED_MESSAGE);
    assert_eq!(state.error(), Some("Failed to load Swagger spec"));
}
