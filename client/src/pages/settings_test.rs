use super::*;

fn valid_form() -> SettingsForm {
    SettingsForm {
        site_name: "Amanah Best Credit".to_owned(),
        support_email: "support@example.com".to_owned(),
        company_name: "Amanah Best Credit Sdn Bhd".to_owned(),
        company_address: "Kuala Lumpur".to_owned(),
        company_phone: "60142992867".to_owned(),
        min_loan_amount: "5000".to_owned(),
        max_loan_amount: "250000".to_owned(),
        interest_rate_min: "2.5".to_owned(),
        interest_rate_max: "12".to_owned(),
    }
}

#[test]
fn parse_round_trips_a_valid_form() {
    let settings = parse_settings_form(&valid_form()).unwrap();
    assert_eq!(settings.site_name, "Amanah Best Credit");
    assert!((settings.min_loan_amount - 5000.0).abs() < f64::EPSILON);
    assert!((settings.interest_rate_max - 12.0).abs() < f64::EPSILON);

    let form = SettingsForm::from_settings(&settings);
    assert_eq!(parse_settings_form(&form).unwrap(), settings);
}

#[test]
fn parse_requires_site_name_and_support_email() {
    let mut form = valid_form();
    form.site_name = "  ".to_owned();
    assert_eq!(parse_settings_form(&form), Err("Site name and support email are required."));
}

#[test]
fn parse_rejects_non_numeric_amounts() {
    let mut form = valid_form();
    form.max_loan_amount = "a lot".to_owned();
    assert_eq!(parse_settings_form(&form), Err("Loan amounts must be numbers."));
}

#[test]
fn parse_rejects_inverted_ranges() {
    let mut form = valid_form();
    form.min_loan_amount = "500000".to_owned();
    assert_eq!(parse_settings_form(&form), Err("Minimum loan amount exceeds the maximum."));

    let mut form = valid_form();
    form.interest_rate_min = "15".to_owned();
    assert_eq!(parse_settings_form(&form), Err("Minimum interest rate exceeds the maximum."));
}

#[test]
fn parse_rejects_invalid_support_email() {
    let mut form = valid_form();
    form.support_email = "not-an-email".to_owned();
    assert_eq!(parse_settings_form(&form), Err("Enter a valid support email."));
}
