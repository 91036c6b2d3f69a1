//! Login credential schema.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{ObjectReader, Schema, ValidationErrors};

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 100;

/// Validated login credentials. The username is stored trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub struct LoginSchema;

impl Schema for LoginSchema {
    type Output = Credentials;

    const NAME: &'static str = "Credentials";

    fn validate(input: &Value) -> Result<Credentials, ValidationErrors> {
        let mut reader = ObjectReader::new(input)?;

        let username = reader.required_str("username").map(|raw| raw.trim().to_owned());
        if let Some(username) = &username {
            if let Some(message) = username_error(username) {
                reader.push("username", message);
            }
        }

        let password = reader.required_str("password");
        if let Some(password) = &password {
            if let Some(message) = password_error(password) {
                reader.push("password", message);
            }
        }

        reader.finish()?;
        Ok(Credentials { username: username.unwrap_or_default(), password: password.unwrap_or_default() })
    }

    fn openapi() -> Value {
        json!({
            "type": "object",
            "required": ["username", "password"],
            "properties": {
                "username": {
                    "type": "string",
                    "minLength": USERNAME_MIN,
                    "maxLength": USERNAME_MAX,
                    "description": "Trimmed before length checks."
                },
                "password": {
                    "type": "string",
                    "format": "password",
                    "minLength": PASSWORD_MIN,
                    "maxLength": PASSWORD_MAX
                }
            }
        })
    }
}

/// Length rule for an already-trimmed username.
pub(crate) fn username_error(username: &str) -> Option<&'static str> {
    let len = username.chars().count();
    if len < USERNAME_MIN {
        Some("Username must be at least 3 characters")
    } else if len > USERNAME_MAX {
        Some("Username must be at most 50 characters")
    } else {
        None
    }
}

/// Length rule shared by the login form and the new-password form.
pub(crate) fn password_error(password: &str) -> Option<&'static str> {
    let len = password.chars().count();
    if len < PASSWORD_MIN {
        Some("Password must be at least 8 characters")
    } else if len > PASSWORD_MAX {
        Some("Password must be at most 100 characters")
    } else {
        None
    }
}
