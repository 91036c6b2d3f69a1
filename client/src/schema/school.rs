//! School record schema.

#[cfg(test)]
#[path = "school_test.rs"]
mod school_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{ObjectReader, Schema, ValidationErrors};

pub const REQUIRED_MESSAGE: &str = "Required!";

const FIELDS: [&str; 3] = ["name", "contact", "address"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub contact: String,
    pub address: String,
}

pub struct SchoolSchema;

impl Schema for SchoolSchema {
    type Output = School;

    const NAME: &'static str = "School";

    fn validate(input: &Value) -> Result<School, ValidationErrors> {
        let mut reader = ObjectReader::new(input)?;
        let [name, contact, address] = FIELDS.map(|field| read_non_empty(&mut reader, field));
        reader.finish()?;
        Ok(School {
            name: name.unwrap_or_default(),
            contact: contact.unwrap_or_default(),
            address: address.unwrap_or_default(),
        })
    }

    fn openapi() -> Value {
        let field = json!({ "type": "string", "minLength": 1 });
        json!({
            "type": "object",
            "required": FIELDS,
            "properties": {
                "name": field,
                "contact": field,
                "address": field
            }
        })
    }
}

/// Missing and empty both surface as `"Required!"`; a wrong type keeps its
/// type message.
fn read_non_empty(reader: &mut ObjectReader<'_>, field: &str) -> Option<String> {
    match reader.optional_str(field) {
        Some(value) if !value.is_empty() => Some(value),
        Some(_) => {
            reader.push(field, REQUIRED_MESSAGE);
            None
        }
        None => {
            if !reader.has_error(field) {
                reader.push(field, REQUIRED_MESSAGE);
            }
            None
        }
    }
}
