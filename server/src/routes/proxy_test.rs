use super::*;
use axum::body::Bytes;

use api::store::{AUTH_COOKIE, USER_COOKIE};

fn forwarded(status: StatusCode) -> Forwarded {
    Forwarded {
        status,
        content_type: Some("application/json".to_owned()),
        set_cookies: vec![],
        body: Bytes::from_static(b"{}"),
    }
}

fn set_cookie_values(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
        .collect()
}

#[test]
fn success_passes_status_and_content_type_through() {
    let response = respond(forwarded(StatusCode::OK), CookieJar::new(), false);
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap(),
        "application/json"
    );
    assert!(set_cookie_values(&response).is_empty());
}

#[test]
fn non_401_errors_pass_through_without_touching_cookies() {
    // 403/404/429/5xx are the page's to present; the session stays intact.
    for status in [
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let response = respond(forwarded(status), CookieJar::new(), false);
        assert_eq!(response.status(), status);
        assert!(set_cookie_values(&response).is_empty(), "status {status}");
    }
}

#[test]
fn backend_401_expires_both_session_cookies() {
    let response = respond(forwarded(StatusCode::UNAUTHORIZED), CookieJar::new(), false);
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let cookies = set_cookie_values(&response);
    for name in [AUTH_COOKIE, USER_COOKIE] {
        assert!(
            cookies.iter().any(|c| c.starts_with(&format!("{name}=")) && c.contains("Max-Age=0")),
            "expected expiration for {name}, got {cookies:?}"
        );
    }
}

#[test]
fn backend_set_cookie_headers_are_forwarded() {
    // The anti-forgery cookie is issued by the backend and must reach the
    // browser through the proxy.
    let mut fwd = forwarded(StatusCode::OK);
    fwd.set_cookies = vec!["XSRF-TOKEN=xyz; Path=/".to_owned()];
    let response = respond(fwd, CookieJar::new(), false);
    assert_eq!(set_cookie_values(&response), vec!["XSRF-TOKEN=xyz; Path=/".to_owned()]);
}
