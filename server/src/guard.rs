//! Edge route guard — gates page navigations before any page code runs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Applied as middleware over the SSR router. API calls and static assets
//! are not navigations and pass through untouched.
//!
//! The guard inspects cookie *presence* only; an expired or forged token
//! still passes. That is deliberate: validity is the backend's call, made
//! per-request and enforced through the pipeline's 401 handling, so the
//! guard stays a pure routing decision with no outbound traffic.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use api::routes::{GuardDecision, dashboard_path, decide, login_path};
use api::store::AUTH_COOKIE;

/// Middleware entry point.
pub async fn route_guard(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if !is_page_navigation(&path) {
        return next.run(req).await;
    }

    match decide(&path, credential_present(req.headers())) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::RedirectLogin => {
            tracing::debug!(%path, "unauthenticated navigation, redirecting to login");
            Redirect::temporary(&login_path(&path)).into_response()
        }
        GuardDecision::RedirectDashboard => {
            Redirect::temporary(&dashboard_path(&path)).into_response()
        }
    }
}

/// Whether a non-empty credential cookie rides on the request.
pub(crate) fn credential_present(headers: &HeaderMap) -> bool {
    let jar = CookieJar::from_headers(headers);
    jar.get(AUTH_COOKIE).is_some_and(|c| !c.value().is_empty())
}

/// Page navigations only: API calls, the build output under `/pkg`, health
/// probes, and file-extension paths (favicon, images) are skipped.
pub(crate) fn is_page_navigation(path: &str) -> bool {
    !(path.starts_with("/api/")
        || path.starts_with("/pkg/")
        || path == "/healthz"
        || path.rsplit('/').next().is_some_and(|seg| seg.contains('.')))
}
