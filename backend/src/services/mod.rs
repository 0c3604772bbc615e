//! Service layer for clock conversions.
//!
//! [`berlin_clock`] holds the pure conversion functions; [`clock`] provides
//! the time sources the HTTP layer reads "now" from.

pub mod berlin_clock;
pub mod clock;

pub use berlin_clock::{count_lit, decode, decode_rows, encode, now, parse_time_string};
pub use clock::{Clock, FixedClock, SystemClock};
