//! Application State
//!
//! Shared state accessible by all handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::client::DashboardApi;

/// Shared application state for all handlers
pub struct AppState<A> {
    /// Backend the dashboard reads from
    pub api: Arc<A>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl<A: DashboardApi> AppState<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
