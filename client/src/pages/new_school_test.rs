use super::*;
use crate::schema::school::REQUIRED_MESSAGE;

#[test]
fn school_input_trims_fields() {
    let school = SchoolSchema::validate(&school_input(" Hillside ", " 555 ", " Main St ")).unwrap();
    assert_eq!(school.name, "Hillside");
    assert_eq!(school.contact, "555");
    assert_eq!(school.address, "Main St");
}

#[test]
fn blank_fields_report_required() {
    let errors = SchoolSchema::validate(&school_input("  ", "555", "")).unwrap_err().field_map();
    assert_eq!(errors.get("name").map(String::as_str), Some(REQUIRED_MESSAGE));
    assert_eq!(errors.get("address").map(String::as_str), Some(REQUIRED_MESSAGE));
    assert!(!errors.contains_key("contact"));
}
