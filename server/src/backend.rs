//! Outbound half of the request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/api/*` call the client makes lands here and is forwarded to the
//! lending backend with the bearer credential read from the request's
//! cookies; state-changing verbs additionally echo the anti-forgery cookie
//! as a header. Responses pass through with their status intact: no retry,
//! no token refresh. The 401 class gets its extra treatment (cookie
//! clearing) in the proxy handler, not here.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Method, StatusCode, header};

use api::profile::UserProfile;
use api::store::{AUTH_COOKIE, XSRF_COOKIE, XSRF_HEADER, cookie_value};
use api::types::{LoginRequest, LoginResponse};

/// Outbound call budget, matching the panel's historical client timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client bound to the lending backend's base URL.
#[derive(Clone)]
pub struct Backend {
    client: reqwest::Client,
    base: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("http client init failed: {0}")]
    Init(String),
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("unexpected backend response: {0}")]
    Decode(String),
    #[error("backend rejected the request: {0}")]
    Status(StatusCode),
    #[error("invalid credentials")]
    BadCredentials,
}

/// A backend response carried through to the browser.
#[derive(Debug)]
pub struct Forwarded {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub set_cookies: Vec<String>,
    pub body: Bytes,
}

impl Backend {
    /// Build a client for the given base URL (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Init` when the TLS client cannot be built.
    pub fn new(base: &str) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Init(e.to_string()))?;
        Ok(Self { client, base: base.trim_end_matches('/').to_owned() })
    }

    /// Exchange login credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// `BadCredentials` on a backend 401, `Status` on any other
    /// non-success status, `Unreachable`/`Decode` for transport and shape
    /// failures.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BackendError> {
        let resp = self
            .client
            .post(join_url(&self.base, "/auth/login", None))
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        match resp.status() {
            status if status.is_success() => {
                resp.json::<LoginResponse>().await.map_err(|e| BackendError::Decode(e.to_string()))
            }
            StatusCode::UNAUTHORIZED => Err(BackendError::BadCredentials),
            status => Err(BackendError::Status(status)),
        }
    }

    /// Fetch the profile behind a bearer token (`GET /auth/me`).
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Backend::login`].
    pub async fn me(&self, token: &str) -> Result<UserProfile, BackendError> {
        let resp = self
            .client
            .get(join_url(&self.base, "/auth/me", None))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        match resp.status() {
            status if status.is_success() => {
                resp.json::<UserProfile>().await.map_err(|e| BackendError::Decode(e.to_string()))
            }
            StatusCode::UNAUTHORIZED => Err(BackendError::BadCredentials),
            status => Err(BackendError::Status(status)),
        }
    }

    /// Forward an arbitrary panel API call to the backend.
    ///
    /// The bearer credential is read from `cookie_header`; state-changing
    /// verbs echo the anti-forgery cookie. The response status is passed
    /// through untouched so the caller sees exactly what the backend said.
    ///
    /// # Errors
    ///
    /// `Unreachable` when the request never completes; HTTP error statuses
    /// are data, not errors, and come back inside `Forwarded`.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<&str>,
        cookie_header: &str,
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<Forwarded, BackendError> {
        let url = join_url(&self.base, path, query);
        let state_changing = is_state_changing(&method);

        let mut req = self.client.request(method, url);
        if let Some(token) = cookie_value(cookie_header, AUTH_COOKIE) {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if state_changing {
            if let Some(xsrf) = cookie_value(cookie_header, XSRF_COOKIE) {
                req = req.header(XSRF_HEADER, xsrf);
            }
        }
        if let Some(ct) = content_type {
            req = req.header(header::CONTENT_TYPE, ct);
        }

        let resp = req
            .body(body)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        let set_cookies = resp
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(ToOwned::to_owned)
            .collect();
        let body = resp.bytes().await.map_err(|e| BackendError::Unreachable(e.to_string()))?;

        Ok(Forwarded { status, content_type, set_cookies, body })
    }
}

/// Verbs that mutate state and therefore carry the anti-forgery echo.
#[must_use]
pub fn is_state_changing(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

/// Join base, path, and query into a target URL. The wildcard capture
/// arrives without its leading slash; both forms are accepted.
#[must_use]
pub fn join_url(base: &str, path: &str, query: Option<&str>) -> String {
    let slash = if path.starts_with('/') { "" } else { "/" };
    match query {
        Some(q) if !q.is_empty() => format!("{base}{slash}{path}?{q}"),
        _ => format!("{base}{slash}{path}"),
    }
}
