//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, fetches, cancellation)
//! and delegates rendering details to `components`.

pub mod dashboard;
pub mod leads;
pub mod login;
pub mod logs;
pub mod reports;
pub mod settings;
pub mod testimonials;
pub mod users;
