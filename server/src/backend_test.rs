use super::*;

// =============================================================================
// is_state_changing — anti-forgery echo applies to mutating verbs only
// =============================================================================

#[test]
fn mutating_verbs_are_state_changing() {
    for method in [Method::POST, Method::PUT, Method::PATCH, Method::DELETE] {
        assert!(is_state_changing(&method), "{method}");
    }
}

#[test]
fn read_verbs_are_not_state_changing() {
    for method in [Method::GET, Method::HEAD, Method::OPTIONS] {
        assert!(!is_state_changing(&method), "{method}");
    }
}

// =============================================================================
// join_url
// =============================================================================

#[test]
fn join_url_accepts_wildcard_capture_without_slash() {
    assert_eq!(join_url("http://api.local/api", "leads/stats", None), "http://api.local/api/leads/stats");
}

#[test]
fn join_url_accepts_absolute_path() {
    assert_eq!(join_url("http://api.local/api", "/auth/me", None), "http://api.local/api/auth/me");
}

#[test]
fn join_url_appends_query_when_present() {
    assert_eq!(
        join_url("http://api.local/api", "audit-logs", Some("page=2&limit=15")),
        "http://api.local/api/audit-logs?page=2&limit=15"
    );
}

#[test]
fn join_url_ignores_empty_query() {
    assert_eq!(join_url("http://api.local/api", "leads", Some("")), "http://api.local/api/leads");
}

// =============================================================================
// transport errors
// =============================================================================

#[tokio::test]
async fn forward_reports_unreachable_backend() {
    // Port 9 (discard) refuses connections; the pipeline surfaces transport
    // failure as Unreachable rather than inventing an HTTP status.
    let backend = Backend::new("http://127.0.0.1:9").unwrap();
    let err = backend
        .forward(Method::GET, "leads", None, "authToken=tok", None, Bytes::new())
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Unreachable(_)));
}

#[tokio::test]
async fn login_reports_unreachable_backend() {
    let backend = Backend::new("http://127.0.0.1:9").unwrap();
    let request = LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    assert!(matches!(backend.login(&request).await.unwrap_err(), BackendError::Unreachable(_)));
}
