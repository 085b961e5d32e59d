//! Fall status endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::FallStatus;

use super::AppState;

/// GET /fall_detect — report whether a fall has been detected.
#[tracing::instrument(skip(state))]
pub async fn status(State(state): State<Arc<AppState>>) -> Json<FallStatus> {
    metrics::counter!("fall_detect_requests_total").increment(1);
    tracing::debug!(
        fall_detected = state.fall_status.is_detected(),
        "fall status requested"
    );
    Json(state.fall_status)
}
