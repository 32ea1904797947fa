//! Validated user profile for display and menu filtering.
//!
//! DESIGN
//! ======
//! The backend's login/me responses and the `userData` cookie are parsed
//! into this type exactly once, at the boundary where they are first
//! consumed; shape mismatches are rejected there instead of trusted at
//! every call site. The profile is display-only data from a client-visible
//! cookie and is never authoritative for access control.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

/// Admin panel role as reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    Admin,
    Viewer,
}

impl Role {
    /// Parse a backend role string. Accepts `SUPER_ADMIN`-style constants
    /// as well as the `"Super Admin"` display form, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "SUPER_ADMIN" => Some(Self::SuperAdmin),
            "ADMIN" => Some(Self::Admin),
            "VIEWER" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// The wire constant this role serializes to.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::Admin => "ADMIN",
            Self::Viewer => "VIEWER",
        }
    }

    /// Human-readable label for UI chrome.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super Admin",
            Self::Admin => "Admin",
            Self::Viewer => "Viewer",
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ProfileError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or(ProfileError::UnknownRole(raw))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// Display profile stored in the `userData` cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Why a profile payload was rejected at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("malformed profile payload: {0}")]
    Malformed(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

impl UserProfile {
    /// Parse-or-reject a JSON profile payload (backend response body or the
    /// `userData` cookie value).
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` when the payload is not valid JSON, is missing
    /// required fields, or carries a role outside the known set.
    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        serde_json::from_str(raw).map_err(|e| ProfileError::Malformed(e.to_string()))
    }

    /// Serialize for the `userData` cookie.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_owned())
    }

    /// Name when present, otherwise the email. What the sidebar shows.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
