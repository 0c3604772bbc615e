//! Data Transfer Objects for the HTTP API.
//!
//! The clock payloads already derive Serialize/Deserialize and are
//! re-exported from the api module; only the service-level responses live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{ConvertQuery, DecodeResponse, LampState};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version serving the API
    pub version: String,
}
