//! Inbound half of the request pipeline.
//!
//! ARCHITECTURE
//! ============
//! All calls are same-origin `/api/*`: the browser attaches the session
//! cookies and the host forwards to the backend with the bearer header
//! and anti-forgery echo. This module owns failure mapping and the global
//! 401 interception: a 401 anywhere trips a one-shot latch and navigates
//! to the locale-derived login path. The failing caller still receives its
//! own `Err`, and concurrent callers are never left with an unhandled
//! rejection; the latch bounds the side effect to a single redirect per
//! session lapse.
//!
//! Other failure classes (403, 404, 429, 5xx, network) pass through to the
//! calling page unmodified. No retries.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;

use api::error::ApiFailure;

static REDIRECT_LATCH: AtomicBool = AtomicBool::new(false);

/// Whether a 401 should trigger the navigation side effect: at most once
/// per lapse, and never while already sitting on the login path.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn should_force_login(current_path: &str, login: &str, latch_already_tripped: bool) -> bool {
    !latch_already_tripped && current_path != login
}

/// Re-arm the 401 latch; called after a fresh session is established.
pub fn reset_login_redirect() {
    REDIRECT_LATCH.store(false, Ordering::SeqCst);
}

#[cfg(feature = "hydrate")]
fn intercept_unauthorized() {
    use api::store::SessionStore;

    let Some(window) = web_sys::window() else { return };
    let path = window.location().pathname().unwrap_or_default();
    let login = api::routes::login_path(&path);
    let tripped = REDIRECT_LATCH.swap(true, Ordering::SeqCst);
    if should_force_login(&path, &login, tripped) {
        log::warn!("session rejected by backend, returning to login");
        // The host also expired the cookies on its 401 passthrough; clearing
        // the local store here covers calls that bypassed the forwarder.
        crate::util::cookies::BrowserStore.clear();
        let _ = window.location().set_href(&login);
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(
    resp: gloo_net::http::Response,
    intercept: bool,
) -> Result<T, ApiFailure> {
    if !resp.ok() {
        let failure = ApiFailure::from_status(resp.status());
        if intercept && failure.is_unauthorized() {
            intercept_unauthorized();
        }
        return Err(failure);
    }
    resp.json::<T>().await.map_err(|e| ApiFailure::Decode(e.to_string()))
}

/// GET a JSON resource.
///
/// # Errors
///
/// Returns the mapped `ApiFailure`; on the server it always fails.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;
        decode(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side())
    }
}

/// POST a JSON body, expecting a JSON response.
///
/// # Errors
///
/// Returns the mapped `ApiFailure`; on the server it always fails.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiFailure> {
    send_json(Verb::Post, path, body, true).await
}

/// PATCH a JSON body, expecting a JSON response.
///
/// # Errors
///
/// Returns the mapped `ApiFailure`; on the server it always fails.
pub async fn patch_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiFailure> {
    send_json(Verb::Patch, path, body, true).await
}

/// PATCH without a body (toggle-style endpoints).
///
/// # Errors
///
/// Returns the mapped `ApiFailure`; on the server it always fails.
pub async fn patch_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(path)
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;
        decode(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side())
    }
}

/// DELETE a resource; success bodies are ignored.
///
/// # Errors
///
/// Returns the mapped `ApiFailure`; on the server it always fails.
pub async fn delete(path: &str) -> Result<(), ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(path)
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let failure = ApiFailure::from_status(resp.status());
        if failure.is_unauthorized() {
            intercept_unauthorized();
        }
        Err(failure)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(server_side())
    }
}

/// POST for the login call itself: its 401 means bad credentials, not an
/// expired session, so the interceptor stays out of it.
///
/// # Errors
///
/// Returns the mapped `ApiFailure`; on the server it always fails.
pub async fn post_json_uninterpreted<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiFailure> {
    send_json(Verb::Post, path, body, false).await
}

#[derive(Clone, Copy)]
enum Verb {
    Post,
    Patch,
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    verb: Verb,
    path: &str,
    body: &B,
    intercept: bool,
) -> Result<T, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match verb {
            Verb::Post => gloo_net::http::Request::post(path),
            Verb::Patch => gloo_net::http::Request::patch(path),
        };
        let resp = builder
            .json(body)
            .map_err(|e| ApiFailure::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;
        decode(resp, intercept).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body, intercept);
        Err(server_side())
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiFailure {
    ApiFailure::Network("not available on server".to_owned())
}

// =============================================================================
// QUERY STRINGS
// =============================================================================

/// Encode key/value pairs as a query string (`?a=1&b=2`), empty when there
/// are no pairs.
#[must_use]
pub fn query_string(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> =
        pairs.iter().map(|(k, v)| format!("{k}={}", urlencoding::encode(v))).collect();
    format!("?{}", encoded.join("&"))
}

/// Append encoded pairs onto a path.
#[must_use]
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    format!("{path}{}", query_string(pairs))
}
