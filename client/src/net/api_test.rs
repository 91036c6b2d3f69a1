use super::*;
use crate::net::types::Role;

#[test]
fn questions_endpoint_formats_expected_path() {
    assert_eq!(questions_endpoint("t42"), "/api/tests/t42/questions");
}

#[test]
fn questions_endpoint_keeps_slash_inside_one_segment() {
    assert_eq!(questions_endpoint("math/101"), "/api/tests/math%2F101/questions");
}

#[test]
fn questions_endpoint_escapes_query_fragment_and_space() {
    assert_eq!(questions_endpoint("q?x=1"), "/api/tests/q%3Fx=1/questions");
    assert_eq!(questions_endpoint("unit 3#b"), "/api/tests/unit%203%23b/questions");
    assert_eq!(questions_endpoint("50%"), "/api/tests/50%25/questions");
}

#[test]
fn questions_endpoint_leaves_unreserved_ids_alone() {
    assert_eq!(questions_endpoint("algebra-1_v2.final~x"), "/api/tests/algebra-1_v2.final~x/questions");
}

#[test]
fn session_from_null_is_signed_out() {
    assert!(session_from_value(Value::Null).is_none());
}

#[test]
fn session_from_empty_object_is_signed_out() {
    assert!(session_from_value(json!({})).is_none());
}

#[test]
fn session_from_payload_keeps_role() {
    let session = session_from_value(json!({ "user": { "role": "teacher" } })).unwrap();
    assert_eq!(session.user.role, Some(Role::Teacher));
}

#[test]
fn session_from_malformed_payload_is_signed_out() {
    assert!(session_from_value(json!({ "user": "nobody" })).is_none());
}

#[test]
fn reset_password_body_carries_token_and_password() {
    assert_eq!(
        reset_password_body("tok", "new-secret"),
        json!({ "token": "tok", "password": "new-secret" })
    );
}
