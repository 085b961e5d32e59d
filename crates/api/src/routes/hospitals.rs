//! Hospital data receiver.

use axum::Json;
use axum::http::StatusCode;
use common::{Acknowledgment, HospitalRecord};
use uuid::Uuid;

/// POST /send_hospitals — log the posted payload and acknowledge it.
///
/// The body is not validated or stored. Malformed JSON is rejected by the
/// `Json` extractor before this runs.
#[tracing::instrument(skip(record))]
pub async fn receive(Json(record): Json<HospitalRecord>) -> (StatusCode, Json<Acknowledgment>) {
    let receipt_id = Uuid::new_v4();
    let hospital_count = record.hospital_count();

    metrics::counter!("hospital_records_received_total").increment(1);
    if let Some(count) = hospital_count {
        metrics::histogram!("hospital_record_entries").record(count as f64);
    }

    tracing::info!(
        %receipt_id,
        hospitals = ?hospital_count,
        data = %record.as_value(),
        "received hospital data"
    );

    (StatusCode::OK, Json(Acknowledgment::hospital_data_received()))
}
