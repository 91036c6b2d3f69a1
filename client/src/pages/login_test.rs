use super::*;

#[test]
fn login_input_validates_through_schema() {
    let creds = LoginSchema::validate(&login_input(" alice ", "password1")).unwrap();
    assert_eq!(creds.username, "alice");
}

#[test]
fn login_input_surfaces_field_errors() {
    let errors = LoginSchema::validate(&login_input("al", "short")).unwrap_err().field_map();
    assert_eq!(errors.get("username").map(String::as_str), Some("Username must be at least 3 characters"));
    assert_eq!(errors.get("password").map(String::as_str), Some("Password must be at least 8 characters"));
}

#[test]
fn unauthorized_maps_to_friendly_message() {
    let err = FetchError::Status { status: 401, body: "nope".into() };
    assert_eq!(sign_in_failure_message(&err), "Invalid username or password.");
}

#[test]
fn other_failures_keep_error_text() {
    let err = FetchError::Status { status: 500, body: "down".into() };
    assert_eq!(sign_in_failure_message(&err), "Sign-in failed: HTTP error! status: 500, message: down");
}
