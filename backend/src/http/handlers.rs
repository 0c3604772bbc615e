//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! clock service for the conversion itself.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use tracing::{debug, warn};

use super::dto::{ConvertQuery, DecodeResponse, HealthResponse, LampState};
use super::error::AppError;
use super::state::AppState;
use crate::services::berlin_clock;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Clock Endpoints
// =============================================================================

/// GET /api/time
///
/// Current time as a lamp pattern. Polled once per second by the front-end.
pub async fn current_time(State(state): State<AppState>) -> HandlerResult<LampState> {
    let now = state.clock.now();
    debug!(time = %now, "encoding current time");
    Ok(Json(berlin_clock::encode(now)))
}

/// GET /api/time/convert?time=HH:MM:SS
///
/// Lamp pattern for an arbitrary time of day.
pub async fn convert_time(
    query: Result<Query<ConvertQuery>, QueryRejection>,
) -> HandlerResult<LampState> {
    let Query(query) = query?;
    let time = berlin_clock::parse_time_string(&query.time).map_err(|e| {
        warn!(input = %query.time, error = %e, "rejected time conversion");
        e
    })?;

    Ok(Json(berlin_clock::encode(time)))
}

/// POST /api/time/decode
///
/// Decode a lamp pattern back to `HH:MM:SS`. Seconds come back as 00 or 01
/// since the seconds lamp only carries parity.
pub async fn decode_time(
    body: Result<Json<LampState>, JsonRejection>,
) -> HandlerResult<DecodeResponse> {
    let Json(state) = body?;
    let time = berlin_clock::decode(&state).map_err(|e| {
        warn!(error = %e, "rejected lamp pattern");
        e
    })?;

    Ok(Json(time.into()))
}
