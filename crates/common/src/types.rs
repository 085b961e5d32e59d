use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a fall has been detected.
///
/// Fixed at startup and read on every status request; nothing mutates it
/// while the process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallStatus {
    pub fall_detected: bool,
}

impl FallStatus {
    /// Creates a status with the given flag.
    pub fn new(fall_detected: bool) -> Self {
        Self { fall_detected }
    }

    /// Returns the flag.
    pub fn is_detected(&self) -> bool {
        self.fall_detected
    }
}

impl Default for FallStatus {
    fn default() -> Self {
        Self::new(true)
    }
}

/// An unvalidated hospital payload posted by a client.
///
/// Any JSON value is accepted. The record is only logged, never stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct HospitalRecord(Value);

impl HospitalRecord {
    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Number of entries in a top-level `hospitals` array, if there is one.
    ///
    /// Best effort, for logging only.
    pub fn hospital_count(&self) -> Option<usize> {
        self.0.get("hospitals")?.as_array().map(Vec::len)
    }
}

/// Fixed reply sent once a hospital payload has been logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub message: String,
}

impl Acknowledgment {
    pub const HOSPITAL_DATA_RECEIVED: &'static str = "Hospital data received successfully";

    /// The acknowledgment for a received hospital payload.
    pub fn hospital_data_received() -> Self {
        Self {
            message: Self::HOSPITAL_DATA_RECEIVED.to_string(),
        }
    }
}
