//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers;
use super::state::AppState;
use crate::config::CorsSettings;
use crate::routes::time::{CONVERT_TIME, DECODE_TIME, GET_CURRENT_TIME};

/// Lamp-state payloads are a few hundred bytes.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Create the main application router, allowing requests from any origin.
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, &CorsSettings::default())
}

/// Create the main application router with the given CORS policy.
pub fn create_router_with_cors(state: AppState, cors: &CorsSettings) -> Router {
    let api = Router::new()
        .route(GET_CURRENT_TIME, get(handlers::current_time))
        .route(CONVERT_TIME, get(handlers::convert_time))
        .route(DECODE_TIME, post(handlers::decode_time));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let origin = if settings.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WallTime;
    use crate::services::FixedClock;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let _router = create_router(AppState::default());
    }

    #[test]
    fn test_router_with_restricted_origins() {
        let state = AppState::new(Arc::new(FixedClock::new(WallTime::MIDNIGHT)));
        let cors = CorsSettings {
            allowed_origins: vec!["http://localhost:3000".to_string(), "bad\norigin".to_string()],
        };
        let _router = create_router_with_cors(state, &cors);
    }
}
