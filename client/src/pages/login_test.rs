use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  ops@example.com  ", "  secret "),
        Ok(("ops@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ops@example.com", "   "), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_non_email() {
    assert_eq!(validate_login_input("not-an-email", "secret"), Err("Enter a valid email address."));
}
