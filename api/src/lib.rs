//! # api
//!
//! Shared contract between the admin panel's client and server halves:
//! the session/auth core (route partition, session store, validated
//! profile, capability resolution, failure taxonomy) and the REST data
//! model spoken by the external lending backend.
//!
//! Everything here is pure and synchronous so both the WASM client and
//! the axum host can depend on it, and so the auth behavior is testable
//! without a browser or a network.

pub mod access;
pub mod error;
pub mod profile;
pub mod routes;
pub mod store;
pub mod types;
