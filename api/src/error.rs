//! Failure taxonomy for calls crossing the request pipeline.
//!
//! ERROR HANDLING
//! ==============
//! Only the `Unauthorized` class is intercepted globally (forced logout
//! redirect); every other class is returned to the calling page, which
//! decides the presentation. Messages are fixed per class so the toasts
//! stay consistent across pages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// What went wrong with an API call, from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiFailure {
    /// 401 — the session is no longer valid.
    #[error("session expired")]
    Unauthorized,
    /// 403 — authenticated but not allowed.
    #[error("permission denied")]
    Forbidden,
    /// 404 — resource missing.
    #[error("resource not found")]
    NotFound,
    /// 429 — rate limited.
    #[error("rate limited")]
    RateLimited,
    /// 5xx — backend fault.
    #[error("server error")]
    Server,
    /// Any other non-success status.
    #[error("unexpected status {0}")]
    Http(u16),
    /// The request never completed (DNS, refused, timeout).
    #[error("network failure: {0}")]
    Network(String),
    /// The response arrived but its body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiFailure {
    /// Map an HTTP status to its failure class. Success statuses are the
    /// caller's responsibility; passing one here yields `Http(status)`.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            other => Self::Http(other),
        }
    }

    /// Fixed user-facing message per class.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Session expired. Please login again.",
            Self::Forbidden => "You don't have permission to perform this action",
            Self::NotFound => "Resource not found",
            Self::RateLimited => "Too many requests. Please try again later",
            Self::Server => "Server error. Please try again later",
            Self::Http(_) | Self::Network(_) | Self::Decode(_) => "An unexpected error occurred",
        }
    }

    /// Whether this failure invalidates the session.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
