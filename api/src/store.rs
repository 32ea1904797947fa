//! Session cookie contract and store abstraction.
//!
//! DESIGN
//! ======
//! The cookie jar is ambient shared state in a browser. Instead of letting
//! every call site read it directly, the request pipeline and the guards
//! consume this `SessionStore` interface; the production stores wrap the
//! real jar (`document.cookie` on the client, the request jar on the
//! server) and tests substitute `MemoryStore`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::profile::UserProfile;

/// Bearer credential cookie. Deliberately readable by client script; the
/// request pipeline reads it to build the `Authorization` header.
pub const AUTH_COOKIE: &str = "authToken";

/// Display-only profile cookie (JSON `UserProfile`). Never authoritative.
pub const USER_COOKIE: &str = "userData";

/// Anti-forgery cookie set by the backend; echoed as a header on
/// state-changing requests. This codebase only ever reads it.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the anti-forgery token is echoed on.
pub const XSRF_HEADER: &str = "X-CSRF-Token";

/// Credential lifetime: one day.
pub const AUTH_MAX_AGE_SECS: i64 = 60 * 60 * 24;

/// Display-profile lifetime: one week.
pub const USER_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// The session-credential surface shared by the request pipeline and the
/// route guards.
///
/// `credential` and `profile` never fail; absence is `None`. `clear` is
/// idempotent. Establish and clear are the only mutations; there is no
/// intermediate state between Anonymous and Authenticated.
pub trait SessionStore {
    /// The bearer credential, if one is established.
    fn credential(&self) -> Option<String>;

    /// The display profile, if one is established and parseable.
    fn profile(&self) -> Option<UserProfile>;

    /// Write both cookies; overwrites any previous session.
    fn establish(&mut self, credential: &str, profile: &UserProfile);

    /// Delete both cookies. Calling on an anonymous store is a no-op.
    fn clear(&mut self);

    /// Whether a credential is present (validity is not inspected).
    fn is_established(&self) -> bool {
        self.credential().is_some()
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    credential: Option<String>,
    profile: Option<UserProfile>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn credential(&self) -> Option<String> {
        self.credential.clone()
    }

    fn profile(&self) -> Option<UserProfile> {
        self.profile.clone()
    }

    fn establish(&mut self, credential: &str, profile: &UserProfile) {
        self.credential = Some(credential.to_owned());
        self.profile = Some(profile.clone());
    }

    fn clear(&mut self) {
        self.credential = None;
        self.profile = None;
    }
}

/// Extract a cookie's value from a `Cookie:`-header-shaped string
/// (`"a=1; b=2"`), as exposed by `document.cookie`.
///
/// Returns the raw value of the first cookie whose name matches exactly.
#[must_use]
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name { Some(value.trim()) } else { None }
    })
}
