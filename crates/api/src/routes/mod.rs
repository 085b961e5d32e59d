//! HTTP route handlers.

pub mod fall;
pub mod health;
pub mod hospitals;
pub mod metrics;

use common::FallStatus;

/// Shared application state accessible from all handlers.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fall_status: FallStatus,
}

impl AppState {
    pub fn new(fall_status: FallStatus) -> Self {
        Self { fall_status }
    }
}
