//! Cross-page helpers: guards, cancellation, cookie access.

pub mod auth;
pub mod cancel;
pub mod cookies;
pub mod format;
