//! Shared reactive state provided via context from the app root.

pub mod auth;
pub mod ui;
