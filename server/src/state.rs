//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! There is no database here. The panel is stateless; the only durable
//! state is the cookie pair on the browser and whatever the lending
//! backend keeps on its side.

use std::sync::Arc;

use crate::backend::{Backend, BackendError};
use crate::config::Config;

/// Shared application state. Clone is required by Axum; inner fields are
/// Arc-wrapped or cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Backend,
}

impl AppState {
    /// Build the state, including the outbound HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Init` when the TLS-backed client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let backend = Backend::new(&config.backend_url)?;
        Ok(Self { config: Arc::new(config), backend })
    }
}
