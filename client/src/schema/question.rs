//! Custom test question schema.
//!
//! Only presence and JSON type are checked. `options` is not required for
//! choice-type questions and `correctAnswer` is not checked against
//! `options`; the backend owns any cross-field rules.

#[cfg(test)]
#[path = "question_test.rs"]
mod question_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{ObjectReader, Schema, ValidationErrors};

pub const DEFAULT_MARKS: f64 = 1.0;

/// A question authored for a specific test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomQuestion {
    #[serde(rename = "fk_test_id")]
    pub fk_test_id: String,
    pub question_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub question_type: String,
    pub answer_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_answer: Option<f64>,
    #[serde(rename = "created_by")]
    pub created_by: String,
    #[serde(default = "default_marks")]
    pub marks: f64,
}

fn default_marks() -> f64 {
    DEFAULT_MARKS
}

pub struct CustomQuestionSchema;

impl Schema for CustomQuestionSchema {
    type Output = CustomQuestion;

    const NAME: &'static str = "CustomQuestion";

    fn validate(input: &Value) -> Result<CustomQuestion, ValidationErrors> {
        let mut reader = ObjectReader::new(input)?;

        let fk_test_id = reader.required_str("fk_test_id");
        let question_text = reader.required_str("questionText");
        let description = reader.optional_str("description");
        let question_type = reader.required_str("questionType");
        let answer_format = reader.required_str("answerFormat");
        let options = reader.optional_str_list("options");
        let correct_answer = reader.optional_str("correctAnswer");
        let numeric_answer = reader.optional_number("numericAnswer");
        let created_by = reader.required_str("created_by");
        let marks = reader.optional_number("marks");

        reader.finish()?;
        Ok(CustomQuestion {
            fk_test_id: fk_test_id.unwrap_or_default(),
            question_text: question_text.unwrap_or_default(),
            description,
            question_type: question_type.unwrap_or_default(),
            answer_format: answer_format.unwrap_or_default(),
            options,
            correct_answer,
            numeric_answer,
            created_by: created_by.unwrap_or_default(),
            marks: marks.unwrap_or(DEFAULT_MARKS),
        })
    }

    fn openapi() -> Value {
        json!({
            "type": "object",
            "required": ["fk_test_id", "questionText", "questionType", "answerFormat", "created_by"],
            "properties": {
                "fk_test_id": { "type": "string", "description": "Test this question belongs to." },
                "questionText": { "type": "string" },
                "description": { "type": "string", "nullable": true },
                "questionType": { "type": "string" },
                "answerFormat": { "type": "string" },
                "options": { "type": "array", "items": { "type": "string" }, "nullable": true },
                "correctAnswer": { "type": "string", "nullable": true },
                "numericAnswer": { "type": "number", "nullable": true },
                "created_by": { "type": "string" },
                "marks": { "type": "number", "nullable": true, "default": DEFAULT_MARKS }
            }
        })
    }
}
