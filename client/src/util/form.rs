//! Raw form-field to JSON conversion.
//!
//! Forms hand schemas a JSON object built from text inputs. Conversions here
//! never reject input themselves: text that fails to parse is passed through
//! as a string so the schema reports the type error with its usual wording.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde_json::{Number, Value};

/// Trimmed text, or `null` when blank.
pub fn optional_text(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() { Value::Null } else { Value::String(trimmed.to_owned()) }
}

/// Numeric input: blank -> `null`, parseable -> number, otherwise the raw text.
pub fn number_field(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(|| Value::String(trimmed.to_owned()), Value::Number)
}

/// One entry per non-blank line, or `null` when there are none.
pub fn line_list(raw: &str) -> Value {
    let items: Vec<Value> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Value::String(line.to_owned()))
        .collect();
    if items.is_empty() { Value::Null } else { Value::Array(items) }
}
