//! Capability resolution for role-gated navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar and the page-level guards used to each carry their own copy
//! of the role check; this module is the single source both consume.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::profile::Role;

/// A navigable admin surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    /// Restricted to Admin / Super Admin roles.
    pub admin_only: bool,
}

/// Full navigation catalog, in sidebar order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", path: "/dashboard", admin_only: false },
    NavItem { title: "Leads", path: "/leads", admin_only: false },
    NavItem { title: "Testimonials", path: "/testimonials", admin_only: false },
    NavItem { title: "Reports", path: "/reports", admin_only: false },
    NavItem { title: "Admin Users", path: "/users", admin_only: true },
    NavItem { title: "Settings", path: "/settings", admin_only: true },
    NavItem { title: "Audit Logs", path: "/logs", admin_only: true },
];

/// Whether a role carries admin capability.
#[must_use]
pub fn is_admin(role: Option<Role>) -> bool {
    matches!(role, Some(Role::SuperAdmin | Role::Admin))
}

/// The navigation entries a role may see, in catalog order.
#[must_use]
pub fn nav_items(role: Option<Role>) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| !item.admin_only || is_admin(role))
        .collect()
}

/// Whether a role may view the surface rooted at `path`.
///
/// Paths outside the catalog are not role-gated here; the edge guard's
/// presence check is the only gate they get.
#[must_use]
pub fn can_view(role: Option<Role>, path: &str) -> bool {
    NAV_ITEMS
        .iter()
        .find(|item| path.starts_with(item.path))
        .is_none_or(|item| !item.admin_only || is_admin(role))
}
