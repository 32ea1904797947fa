//! `/api/{*rest}` — forward panel API calls to the lending backend.
//!
//! ERROR HANDLING
//! ==============
//! Backend statuses pass through untouched so pages can present 403/404/
//! 429/5xx themselves; only the 401 class gets extra treatment here (the
//! session cookies are expired alongside the response). Transport failures
//! surface as 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{self, Body};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::Forwarded;
use crate::routes::session;
use crate::state::AppState;

/// Upper bound on forwarded request bodies.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn forward(
    State(state): State<AppState>,
    Path(rest): Path<String>,
    req: Request,
) -> Response {
    let method = req.method().clone();
    let query = req.uri().query().map(ToOwned::to_owned);
    let cookie_header = req
        .headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned);
    let jar = CookieJar::from_headers(req.headers());

    let Ok(body) = body::to_bytes(req.into_body(), MAX_BODY_BYTES).await else {
        return StatusCode::PAYLOAD_TOO_LARGE.into_response();
    };

    match state
        .backend
        .forward(method, &rest, query.as_deref(), &cookie_header, content_type.as_deref(), body)
        .await
    {
        Ok(forwarded) => respond(forwarded, jar, state.config.cookie_secure),
        Err(e) => {
            tracing::warn!(error = %e, path = %rest, "backend forward failed");
            (StatusCode::BAD_GATEWAY, "backend unavailable").into_response()
        }
    }
}

/// Pass the backend's answer through. A 401 additionally expires the
/// session cookies so the next navigation hits the guard unauthenticated;
/// the status still reaches the caller, whose own error path performs the
/// login redirect.
fn respond(forwarded: Forwarded, jar: CookieJar, secure: bool) -> Response {
    let status = forwarded.status;
    let mut response = (status, Body::from(forwarded.body)).into_response();

    if let Some(ct) = forwarded.content_type.as_deref().and_then(|ct| HeaderValue::from_str(ct).ok()) {
        response.headers_mut().insert(header::CONTENT_TYPE, ct);
    }
    for cookie in &forwarded.set_cookies {
        if let Ok(value) = HeaderValue::from_str(cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    if status == StatusCode::UNAUTHORIZED {
        return (session::clear(jar, secure), response).into_response();
    }
    response
}
