use super::*;

#[test]
fn present_filters_empty_values() {
    assert_eq!(present(Some("tok")), Some("tok".to_owned()));
    assert_eq!(present(Some("")), None);
    assert_eq!(present(None), None);
}

#[test]
fn outside_the_browser_the_jar_reads_empty() {
    // Host builds see no document; every accessor degrades to absence.
    assert_eq!(raw_cookies(), "");
    assert_eq!(credential(), None);
    assert!(stored_profile().is_none());
}

#[test]
fn browser_store_reports_absence_off_browser() {
    let store = BrowserStore;
    assert_eq!(store.credential(), None);
    assert!(!store.is_established());
}

#[test]
fn profile_extraction_composes_parse_and_presence() {
    let cookies = format!("authToken=tok; userData={}", r#"{"id":"u1","email":"a@b.com"}"#);
    let value = present(cookie_value(&cookies, USER_COOKIE)).unwrap();
    let profile = UserProfile::from_json(&value).unwrap();
    assert_eq!(profile.id, "u1");
}

#[test]
fn write_string_carries_the_session_attributes() {
    assert_eq!(
        cookie_write_string(AUTH_COOKIE, "tok", AUTH_MAX_AGE_SECS),
        "authToken=tok; Path=/; Max-Age=86400; SameSite=Strict"
    );
}

#[test]
fn write_string_with_zero_age_expires() {
    let expired = cookie_write_string(USER_COOKIE, "", 0);
    assert!(expired.starts_with("userData=;"));
    assert!(expired.contains("Max-Age=0"));
}
