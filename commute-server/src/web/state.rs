//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::HttpEngine;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Recommendation engine backed by the HTTP clients
    pub engine: Arc<HttpEngine>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: HttpEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
