//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::{Clock, SystemClock};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of the current time for `GET /api/time`
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new application state with the given clock.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }
}
