//! Shared wire types for the fall-alert service.

pub mod types;

pub use types::{Acknowledgment, FallStatus, HospitalRecord};
