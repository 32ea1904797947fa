//! Networking: request pipeline plumbing and typed endpoint calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport, failure mapping, and the global 401 interception;
//! `api` is the typed catalog of backend endpoints the pages call.

pub mod api;
pub mod http;
