use super::*;

#[test]
fn greeting_uses_trimmed_name() {
    assert_eq!(greeting(Some(" Ada ")), "Welcome back, Ada!");
}

#[test]
fn greeting_without_name_is_generic() {
    assert_eq!(greeting(None), "Welcome back!");
    assert_eq!(greeting(Some("  ")), "Welcome back!");
}

#[test]
fn role_label_names_role() {
    assert_eq!(role_label(Some(&Role::Student)), "Signed in as student");
    assert_eq!(role_label(None), "Role not assigned");
}
