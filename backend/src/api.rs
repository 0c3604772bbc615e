//! Public API surface for the Rust backend.
//!
//! This file consolidates the types exchanged over the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::error::{ClockError, ClockResult};
pub use crate::models::{Lamp, LampRow, LampState, WallTime};
pub use crate::routes::time::ConvertQuery;
pub use crate::routes::time::DecodeResponse;
