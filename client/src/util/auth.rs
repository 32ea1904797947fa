//! Shared page-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page applies identical redirect behavior: to the login
//! page when auth has loaded and no user is present, and to the dashboard
//! when the user's role cannot view the surface. Role checks come from
//! `api::access`, the same capability source the sidebar renders from.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use api::access::can_view;

use crate::state::auth::AuthState;

/// Whether a loaded, userless auth state warrants the login redirect.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether a loaded session lacks the role to view `path`.
#[must_use]
pub fn should_redirect_forbidden(state: &AuthState, path: &str) -> bool {
    !state.loading && state.user.is_some() && !can_view(state.role(), path)
}

/// Install the page guard: redirect to `/` when unauthenticated, to
/// `/dashboard` when the role cannot view this surface.
pub fn install_guard<F>(auth: RwSignal<AuthState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/", NavigateOptions::default());
        } else if should_redirect_forbidden(&state, path) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });
}
