//! # Berlin Clock Backend
//!
//! Converts wall-clock time to the lamp pattern of the Berlin Clock
//! (Mengenlehreuhr) and back, and serves both directions over a REST API.
//!
//! ## Features
//!
//! - **Encoding**: `HH:MM:SS` to five lamp rows plus the seconds lamp
//! - **Decoding**: lamp rows back to hours and minutes (seconds by parity only)
//! - **Parsing**: strict `HH:MM:SS` input validation
//! - **HTTP API**: RESTful endpoints for the web front-end
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Types exchanged over the HTTP API
//! - [`models`]: `WallTime`, lamps, lamp rows and the full `LampState`
//! - [`services`]: The conversion functions and clock sources
//! - [`config`]: TOML and environment configuration for the server
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific request/response types and paths
//!
//! ## Example
//!
//! ```
//! use berlin_clock::models::WallTime;
//! use berlin_clock::services::{decode, encode};
//!
//! let state = encode(WallTime::new(13, 17, 1).unwrap());
//! assert_eq!(state.five_minutes_row(), "YYROOOOOOOO");
//! assert_eq!(decode(&state).unwrap().to_string(), "13:17:01");
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
