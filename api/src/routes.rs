//! Route partition for edge navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server middleware and the client-side page guards both consult this
//! partition, so redirect behavior cannot drift between the two. The guard
//! inspects cookie presence only; token validity is the backend's concern
//! and is enforced through 401 interception in the request pipeline.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Path prefixes that require an established session. Prefix semantics so
/// nested routes (`/leads/abc123`) inherit protection.
pub const PROTECTED_PREFIXES: &[&str] = &[
    "/dashboard",
    "/leads",
    "/testimonials",
    "/users",
    "/settings",
    "/logs",
    "/reports",
];

/// Paths that only make sense without a session (the login screen).
/// Matched exactly, never by prefix, so `/` cannot shadow protected paths.
pub const AUTH_ONLY_PATHS: &[&str] = &["/"];

/// Locale segments the marketing site prefixes onto panel URLs.
pub const LOCALES: &[&str] = &["en", "ms"];

/// Which partition a path falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session credential.
    Protected,
    /// Only reachable without a credential (login).
    AuthOnly,
    /// No session requirement either way.
    Public,
}

/// The guard's verdict for a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectLogin,
    RedirectDashboard,
}

/// Split a leading locale segment off a path.
///
/// `/en/leads` becomes `(Some("en"), "/leads")`; a bare `/en` maps to the
/// locale root `(Some("en"), "/")`; paths without a known locale pass
/// through unchanged.
#[must_use]
pub fn strip_locale(path: &str) -> (Option<&str>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, rest),
        None => (trimmed, ""),
    };
    if LOCALES.contains(&head) {
        let locale_len = 1 + head.len();
        if rest.is_empty() {
            (Some(head), "/")
        } else {
            (Some(head), &path[locale_len..])
        }
    } else {
        (None, path)
    }
}

/// Classify a path against the partition, ignoring any locale prefix.
///
/// Auth-only paths are consulted first but only on exact match; protected
/// prefixes are consulted second with prefix semantics. Everything else is
/// public.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    let (_, path) = strip_locale(path);
    if AUTH_ONLY_PATHS.contains(&path) {
        return RouteClass::AuthOnly;
    }
    if PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteClass::Protected;
    }
    RouteClass::Public
}

/// Decide what the guard does with a navigation, given only whether a
/// credential cookie is present.
#[must_use]
pub fn decide(path: &str, authenticated: bool) -> GuardDecision {
    match classify(path) {
        RouteClass::Protected if !authenticated => GuardDecision::RedirectLogin,
        RouteClass::AuthOnly if authenticated => GuardDecision::RedirectDashboard,
        _ => GuardDecision::Allow,
    }
}

/// Login path for the locale the given path carries: `/en` for `/en/leads`,
/// plain `/` otherwise.
#[must_use]
pub fn login_path(current_path: &str) -> String {
    match strip_locale(current_path).0 {
        Some(locale) => format!("/{locale}"),
        None => "/".to_owned(),
    }
}

/// Dashboard path for the locale the given path carries.
#[must_use]
pub fn dashboard_path(current_path: &str) -> String {
    match strip_locale(current_path).0 {
        Some(locale) => format!("/{locale}/dashboard"),
        None => "/dashboard".to_owned(),
    }
}
