//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by page guards and identity-aware chrome to coordinate login
//! redirects and role-dependent rendering. The profile here is display
//! data bootstrapped from the `userData` cookie and refreshed from the
//! backend; it is never authoritative for access control.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api::profile::{Role, UserProfile};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    /// True until the bootstrap profile refresh has resolved; guards hold
    /// their redirects while this is set.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// The current user's role, if known.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    /// What the chrome shows for the signed-in identity.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(String::new, |u| u.display_name().to_owned())
    }
}
