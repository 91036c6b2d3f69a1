//! Form validation schemas shared by pages and the server.
//!
//! DESIGN
//! ======
//! Each schema is a unit type implementing [`Schema`]: a pure function from an
//! arbitrary JSON value to either a typed value or a list of field errors.
//! Pages validate before submitting and the server re-validates on receipt,
//! so both sides agree on messages and field paths.
//!
//! Error messages for missing and mistyped fields follow the wording the
//! browser forms have always shown (`"Required"`,
//! `"Expected string, received number"`).


pub mod login;
pub mod question;
pub mod school;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use login::{Credentials, LoginSchema};
pub use question::{CustomQuestion, CustomQuestionSchema};
pub use school::{School, SchoolSchema};

/// Path used for errors that concern the whole input rather than a field.
pub const ROOT_PATH: &str = "";

/// Validation contract implemented by every form schema.
pub trait Schema {
    /// Typed value produced on success.
    type Output;

    /// Component name used in the OpenAPI document.
    const NAME: &'static str;

    /// Validate `input`, reporting every violated field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing each failing field and its message.
    fn validate(input: &Value) -> Result<Self::Output, ValidationErrors>;

    /// OpenAPI schema object describing the accepted input.
    fn openapi() -> Value;
}

/// A single field-level validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted field path (`"options.2"`), or empty for the root value.
    pub path: String,
    /// Human-readable message shown next to the field.
    pub message: String,
}

/// Structured list of field errors returned by [`Schema::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", render_errors(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

fn render_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| {
            if e.path.is_empty() {
                e.message.clone()
            } else {
                format!("{}: {}", e.path, e.message)
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Single error attached to the root of the input.
    #[must_use]
    pub fn root(message: impl Into<String>) -> Self {
        Self { errors: vec![FieldError { path: ROOT_PATH.to_owned(), message: message.into() }] }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message reported for `path`, if any.
    #[must_use]
    pub fn first_for(&self, path: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.message.as_str())
    }

    /// First message per field, keyed by path. Used by forms to place errors.
    #[must_use]
    pub fn field_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        for e in &self.errors {
            map.entry(e.path.clone()).or_insert_with(|| e.message.clone());
        }
        map
    }
}

/// Zod-style name of a JSON value's kind, used in type mismatch messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(expected: &str, got: &Value) -> String {
    format!("Expected {expected}, received {}", kind_name(got))
}

// =============================================================================
// OBJECT READER
// =============================================================================

/// Field accessor that accumulates errors while a schema reads its input.
pub(crate) struct ObjectReader<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> ObjectReader<'a> {
    /// Start reading `input`, which must be a JSON object.
    pub(crate) fn new(input: &'a Value) -> Result<Self, ValidationErrors> {
        match input {
            Value::Object(map) => Ok(Self { map, errors: Vec::new() }),
            other => Err(ValidationErrors::root(type_mismatch("object", other))),
        }
    }

    pub(crate) fn push(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError { path: path.to_owned(), message: message.into() });
    }

    pub(crate) fn has_error(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// Read a required string. Absent fields report `"Required"`.
    pub(crate) fn required_str(&mut self, key: &str) -> Option<String> {
        match self.map.get(key) {
            None => {
                self.push(key, "Required");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.push(key, type_mismatch("string", other));
                None
            }
        }
    }

    /// Read an optional string; absent and `null` both map to `None`.
    pub(crate) fn optional_str(&mut self, key: &str) -> Option<String> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.push(key, type_mismatch("string", other));
                None
            }
        }
    }

    /// Read an optional number; absent and `null` both map to `None`.
    pub(crate) fn optional_number(&mut self, key: &str) -> Option<f64> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                self.push(key, type_mismatch("number", other));
                None
            }
        }
    }

    /// Read an optional list of strings, reporting bad elements by index.
    pub(crate) fn optional_str_list(&mut self, key: &str) -> Option<Vec<String>> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        other => self.push(&format!("{key}.{i}"), type_mismatch("string", other)),
                    }
                }
                Some(out)
            }
            Some(other) => {
                self.push(key, type_mismatch("array", other));
                None
            }
        }
    }

    /// Finish reading: `Ok(())` when no field failed.
    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors: self.errors })
        }
    }
}
