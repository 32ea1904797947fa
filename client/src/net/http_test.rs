use super::*;

// =============================================================================
// 401 interception policy
// =============================================================================

#[test]
fn first_401_away_from_login_forces_redirect() {
    assert!(should_force_login("/dashboard", "/", false));
    assert!(should_force_login("/en/leads", "/en", false));
}

#[test]
fn tripped_latch_suppresses_further_redirects() {
    // Concurrent 401s each get their own Err, but only the first navigates.
    assert!(!should_force_login("/dashboard", "/", true));
}

#[test]
fn no_redirect_when_already_on_login() {
    assert!(!should_force_login("/", "/", false));
    assert!(!should_force_login("/en", "/en", false));
}

#[test]
fn latch_reset_rearms_the_redirect() {
    reset_login_redirect();
    assert!(should_force_login("/leads", "/", false));
}

// =============================================================================
// query strings
// =============================================================================

#[test]
fn empty_pairs_yield_no_query() {
    assert_eq!(query_string(&[]), "");
    assert_eq!(with_query("/api/leads", &[]), "/api/leads");
}

#[test]
fn pairs_are_joined_and_encoded() {
    let pairs = [("page", "2".to_owned()), ("search", "tan lee".to_owned())];
    assert_eq!(query_string(&pairs), "?page=2&search=tan%20lee");
}

#[test]
fn with_query_appends_to_the_path() {
    let pairs = [("limit", "15".to_owned())];
    assert_eq!(with_query("/api/audit-logs", &pairs), "/api/audit-logs?limit=15");
}

#[test]
fn reserved_characters_are_percent_encoded() {
    let pairs = [("search", "a&b=c".to_owned())];
    assert_eq!(query_string(&pairs), "?search=a%26b%3Dc");
}
