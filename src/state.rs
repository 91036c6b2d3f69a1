//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the server config and in-memory stores for submitted schools and
//! questions. Locks are held only for the insert or copy, never across I/O.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::collections::HashMap;
use std::sync::Arc;

use client::net::types::{QuestionRecord, SchoolRecord};
use client::schema::{CustomQuestion, School};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Schools in submission order.
    pub schools: Arc<RwLock<Vec<SchoolRecord>>>,
    /// Questions keyed by test id, each list in submission order.
    pub questions: Arc<RwLock<HashMap<String, Vec<QuestionRecord>>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            schools: Arc::new(RwLock::new(Vec::new())),
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a validated school under a fresh id.
    pub async fn insert_school(&self, school: School) -> SchoolRecord {
        let record = SchoolRecord { id: Uuid::new_v4().to_string(), school };
        self.schools.write().await.push(record.clone());
        record
    }

    pub async fn list_schools(&self) -> Vec<SchoolRecord> {
        self.schools.read().await.clone()
    }

    /// Store a validated question under its test.
    pub async fn insert_question(&self, question: CustomQuestion) -> QuestionRecord {
        let record = QuestionRecord { id: Uuid::new_v4().to_string(), question };
        self.questions
            .write()
            .await
            .entry(record.question.fk_test_id.clone())
            .or_default()
            .push(record.clone());
        record
    }

    /// Questions for `test_id`; empty when the test has none.
    pub async fn list_questions(&self, test_id: &str) -> Vec<QuestionRecord> {
        self.questions
            .read()
            .await
            .get(test_id)
            .cloned()
            .unwrap_or_default()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
