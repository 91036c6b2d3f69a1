//! API documentation page rendered from the server's OpenAPI document.

#[cfg(test)]
#[path = "api_docs_test.rs"]
mod api_docs_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::components::test_page_layout::TestPageLayout;
use crate::state::load::LoadState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load Swagger spec";

const METHODS: [&str; 5] = ["get", "post", "put", "patch", "delete"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocOperation {
    pub method: String,
    pub path: String,
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocSummary {
    pub title: String,
    pub version: String,
    pub operations: Vec<DocOperation>,
}

/// Flatten `paths` into one row per operation, in path order then method order.
pub(crate) fn summarize_spec(spec: &Value) -> DocSummary {
    let info = &spec["info"];
    let mut operations = Vec::new();
    if let Some(paths) = spec["paths"].as_object() {
        for (path, item) in paths {
            for method in METHODS {
                let Some(op) = item.get(method) else {
                    continue;
                };
                let summary = op["summary"]
                    .as_str()
                    .or_else(|| op["description"].as_str())
                    .unwrap_or_default();
                operations.push(DocOperation {
                    method: method.to_ascii_uppercase(),
                    path: path.clone(),
                    summary: summary.to_owned(),
                });
            }
        }
    }
    DocSummary {
        title: info["title"].as_str().unwrap_or("API").to_owned(),
        version: info["version"].as_str().unwrap_or_default().to_owned(),
        operations,
    }
}

#[component]
pub fn ApiDocsPage() -> impl IntoView {
    let spec = LocalResource::new(crate::net::api::fetch_api_docs);

    let state = move || match spec.get() {
        None => LoadState::Loading,
        Some(result) => LoadState::from_result(result.map(|doc| summarize_spec(&doc))).with_failure_message(LOAD_FAILED_MESSAGE),
    };

    view! {
        <TestPageLayout title="API Docs">
            {move || match state() {
                LoadState::Ready(summary) => view! {
                    <section class="api-docs">
                        <h2 class="api-docs__title">
                            {summary.title}
                            <span class="api-docs__version">{summary.version}</span>
                        </h2>
                        <table class="api-docs__table">
                            <tbody>
                                {summary
                                    .operations
                                    .into_iter()
                                    .map(|op| {
                                        let method_class = format!("api-docs__method api-docs__method--{}", op.method.to_ascii_lowercase());
                                        view! {
                                            <tr>
                                                <td class=method_class>{op.method}</td>
                                                <td class="api-docs__path"><code>{op.path}</code></td>
                                                <td class="api-docs__summary">{op.summary}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    </section>
                }
                    .into_any(),
                LoadState::Failed(message) => view! { <p class="api-docs__error">{message}</p> }.into_any(),
                LoadState::Idle | LoadState::Loading => view! { <p class="api-docs__loading">"Loading..."</p> }.into_any(),
            }}
        </TestPageLayout>
    }
}
