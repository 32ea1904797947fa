//! Browser cookie access with host-testable parsing.
//!
//! DESIGN
//! ======
//! The raw jar read/write is WASM-only; value extraction and the write
//! format live in pure helpers (and `api::store`) so they can be exercised
//! without a browser. `BrowserStore` is the production `SessionStore` the
//! request pipeline and the auth bootstrap consume; tests substitute
//! `api::store::MemoryStore`.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use api::profile::UserProfile;
use api::store::{AUTH_COOKIE, AUTH_MAX_AGE_SECS, SessionStore, USER_COOKIE, USER_MAX_AGE_SECS, cookie_value};

/// The document's cookie string, empty outside the browser.
#[must_use]
pub fn raw_cookies() -> String {
    #[cfg(feature = "hydrate")]
    {
        html_document().and_then(|d| d.cookie().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// The session credential, if a non-empty `authToken` cookie is present.
#[must_use]
pub fn credential() -> Option<String> {
    present(cookie_value(&raw_cookies(), AUTH_COOKIE))
}

/// The display profile from the `userData` cookie, if present and valid.
/// Display-only bootstrap data; the backend profile refresh overwrites it.
#[must_use]
pub fn stored_profile() -> Option<UserProfile> {
    let raw = raw_cookies();
    let value = present(cookie_value(&raw, USER_COOKIE))?;
    UserProfile::from_json(&value).ok()
}

/// Treat an empty cookie value (an expired-but-lingering cookie) as absent.
pub(crate) fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

/// `document.cookie` assignment string for a session-contract cookie.
/// `Max-Age=0` expires; attributes mirror the host's establish path.
pub(crate) fn cookie_write_string(name: &str, value: &str, max_age_secs: i64) -> String {
    format!("{name}={value}; Path=/; Max-Age={max_age_secs}; SameSite=Strict")
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
}

#[allow(unused_variables)]
fn write_cookie(name: &str, value: &str, max_age_secs: i64) {
    #[cfg(feature = "hydrate")]
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&cookie_write_string(name, value, max_age_secs));
    }
}

/// `SessionStore` over the document cookie jar.
///
/// Establish normally happens on the host (the login response sets the
/// cookies), but the pipeline's 401 interception clears local state here
/// before forcing the login navigation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn credential(&self) -> Option<String> {
        credential()
    }

    fn profile(&self) -> Option<UserProfile> {
        stored_profile()
    }

    fn establish(&mut self, credential: &str, profile: &UserProfile) {
        write_cookie(AUTH_COOKIE, credential, AUTH_MAX_AGE_SECS);
        write_cookie(USER_COOKIE, &profile.to_json(), USER_MAX_AGE_SECS);
    }

    fn clear(&mut self) {
        write_cookie(AUTH_COOKIE, "", 0);
        write_cookie(USER_COOKIE, "", 0);
    }
}
