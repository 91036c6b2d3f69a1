//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server reuses these types for its JSON responses so both sides stay in
//! lockstep. `Session` mirrors the external session provider's payload and is
//! only ever read here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::{CustomQuestion, School};

// =============================================================================
// SESSION
// =============================================================================

/// Role attached to a signed-in user by the session provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Teacher,
    Admin,
    /// Any role string this client does not know about, kept verbatim.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
            Self::Other(raw) => raw,
        }
    }

    /// Teachers and admins may author tests.
    #[must_use]
    pub fn can_author_tests(&self) -> bool {
        matches!(self, Self::Teacher | Self::Admin)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "student" => Self::Student,
            "teacher" => Self::Teacher,
            "admin" => Self::Admin,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User block inside a provider session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Session object owned by the external session provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    /// Expiry timestamp as sent by the provider (ISO 8601).
    #[serde(default)]
    pub expires: Option<String>,
}

// =============================================================================
// STORED RECORDS
// =============================================================================

/// A school accepted and stored by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub id: String,
    #[serde(flatten)]
    pub school: School,
}

/// A custom question accepted and stored by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    #[serde(flatten)]
    pub question: CustomQuestion,
}

/// Body of a 422 response: the server-side schema errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<crate::schema::FieldError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// NEWS
// =============================================================================

/// A dashboard announcement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub body: String,
    /// Display date, already formatted (`"2024-09-02"`).
    pub date: String,
}
