use serde::{Deserialize, Serialize};

use crate::models::WallTime;

/// Query string of the convert endpoint (`?time=HH:MM:SS`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertQuery {
    pub time: String,
}

/// Result of decoding a lamp pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeResponse {
    /// Decoded time as `HH:MM:SS`; seconds are 00 or 01.
    pub time: String,
}

impl From<WallTime> for DecodeResponse {
    fn from(time: WallTime) -> Self {
        Self {
            time: time.to_string(),
        }
    }
}

pub const GET_CURRENT_TIME: &str = "/time";
pub const CONVERT_TIME: &str = "/time/convert";
pub const DECODE_TIME: &str = "/time/decode";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_response_from_wall_time() {
        let response = DecodeResponse::from(WallTime::new(13, 17, 1).unwrap());
        assert_eq!(response.time, "13:17:01");
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"time":"13:17:01"}"#
        );
    }

    #[test]
    fn test_convert_query_deserialize() {
        let query: ConvertQuery = serde_json::from_str(r#"{"time":"12:30:45"}"#).unwrap();
        assert_eq!(query.time, "12:30:45");
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_CURRENT_TIME, "/time");
        assert_eq!(CONVERT_TIME, "/time/convert");
        assert_eq!(DECODE_TIME, "/time/decode");
    }
}
