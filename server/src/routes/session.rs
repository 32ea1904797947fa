//! Session actions — the only code paths that create or destroy the
//! session cookies.
//!
//! ARCHITECTURE
//! ============
//! Login is exchanged with the backend server-side so cookie writes happen
//! in one response: `authToken` (bearer, one day) and `userData` (display
//! profile, one week), path `/`, SameSite=Strict, `Secure` per config.
//! Neither cookie is HttpOnly: client script reads the token to build the
//! `Authorization` header and the profile for instant chrome rendering.
//! The profile cookie is display-only and never authoritative.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use api::profile::UserProfile;
use api::store::{AUTH_COOKIE, AUTH_MAX_AGE_SECS, USER_COOKIE, USER_MAX_AGE_SECS};
use api::types::{LoginRequest, SessionInfo};

use crate::backend::BackendError;
use crate::state::AppState;

// =============================================================================
// COOKIE CONSTRUCTION
// =============================================================================

fn session_cookie(name: &'static str, value: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(false)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::seconds(max_age_secs))
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    session_cookie(name, String::new(), 0, secure)
}

/// Write both session cookies; overwrites any previous session.
pub(crate) fn establish(jar: CookieJar, token: &str, profile: &UserProfile, secure: bool) -> CookieJar {
    jar.add(session_cookie(AUTH_COOKIE, token.to_owned(), AUTH_MAX_AGE_SECS, secure))
        .add(session_cookie(USER_COOKIE, profile.to_json(), USER_MAX_AGE_SECS, secure))
}

/// Expire both session cookies. Idempotent: clearing an anonymous jar just
/// re-sends the expirations.
pub(crate) fn clear(jar: CookieJar, secure: bool) -> CookieJar {
    jar.add(expired_cookie(AUTH_COOKIE, secure)).add(expired_cookie(USER_COOKIE, secure))
}

/// Cookie-derived session view. Never fails: a missing or unparseable
/// profile degrades to `user: None`.
pub(crate) fn session_info(jar: &CookieJar) -> SessionInfo {
    let authenticated = jar.get(AUTH_COOKIE).is_some_and(|c| !c.value().is_empty());
    let user = jar
        .get(USER_COOKIE)
        .and_then(|c| UserProfile::from_json(c.value()).ok())
        .filter(|_| authenticated);
    SessionInfo { authenticated, user }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/session` — exchange credentials with the backend, establish
/// the session, return the display profile.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Response {
    let login = match state.backend.login(&request).await {
        Ok(login) => login,
        Err(e) => return login_failure(&e),
    };

    // The backend may omit the profile from the login response; recover it
    // with the fresh token so both cookies are always written together.
    let profile = match login.user {
        Some(profile) => profile,
        None => match state.backend.me(&login.access_token).await {
            Ok(profile) => profile,
            Err(e) => return login_failure(&e),
        },
    };

    tracing::info!(user = %profile.email, "session established");
    let jar = establish(jar, &login.access_token, &profile, state.config.cookie_secure);
    (jar, Json(profile)).into_response()
}

fn login_failure(err: &BackendError) -> Response {
    match err {
        BackendError::BadCredentials => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "Invalid email or password" })),
        )
            .into_response(),
        other => {
            tracing::error!(error = %other, "login exchange failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "message": "Login service unavailable" })),
            )
                .into_response()
        }
    }
}

/// `DELETE /api/session` — expire both cookies unconditionally.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (clear(jar, state.config.cookie_secure), StatusCode::NO_CONTENT)
}

/// `GET /api/session` — report cookie-derived session state.
pub async fn current(jar: CookieJar) -> Json<SessionInfo> {
    Json(session_info(&jar))
}
