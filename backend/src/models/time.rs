use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, ClockResult};

pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;

/// Time of day with whole-second resolution.
///
/// Always holds `hour <= 23`, `minute <= 59` and `second <= 59`; the only way
/// in is through [`WallTime::new`] or a conversion that already guarantees it.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: WallTime = WallTime {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a new wall time, rejecting components outside their range.
    pub fn new(hour: u8, minute: u8, second: u8) -> ClockResult<Self> {
        check_range("hour", hour, MAX_HOUR)?;
        check_range("minute", minute, MAX_MINUTE)?;
        check_range("second", second, MAX_SECOND)?;
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Convert to chrono `NaiveTime`.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour.into(), self.minute.into(), self.second.into())
            .unwrap_or(NaiveTime::MIN)
    }
}

fn check_range(field: &'static str, value: u8, max: u8) -> ClockResult<()> {
    if value > max {
        return Err(ClockError::OutOfRange {
            field,
            value: value.into(),
            max: max.into(),
        });
    }
    Ok(())
}

impl From<NaiveTime> for WallTime {
    /// Drops the sub-second part. A leap second (`nanosecond >= 1e9`) stays on second 59.
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second().min(MAX_SECOND.into()) as u8,
        }
    }
}

impl From<WallTime> for NaiveTime {
    fn from(t: WallTime) -> Self {
        t.to_naive_time()
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for WallTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::services::berlin_clock::parse_time_string(s)
    }
}

impl TryFrom<String> for WallTime {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WallTime> for String {
    fn from(t: WallTime) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        let t = WallTime::new(23, 59, 59).unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
        assert_eq!(t.second(), 59);
        assert_eq!(WallTime::new(0, 0, 0).unwrap(), WallTime::MIDNIGHT);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            WallTime::new(24, 0, 0),
            Err(ClockError::OutOfRange {
                field: "hour",
                value: 24,
                max: 23
            })
        );
        assert!(matches!(
            WallTime::new(0, 60, 0),
            Err(ClockError::OutOfRange { field: "minute", .. })
        ));
        assert!(matches!(
            WallTime::new(0, 0, 60),
            Err(ClockError::OutOfRange { field: "second", .. })
        ));
    }

    #[test]
    fn test_display_zero_padded() {
        assert_eq!(WallTime::new(7, 5, 3).unwrap().to_string(), "07:05:03");
        assert_eq!(WallTime::MIDNIGHT.to_string(), "00:00:00");
    }

    #[test]
    fn test_from_str() {
        let t: WallTime = "12:30:45".parse().unwrap();
        assert_eq!(t, WallTime::new(12, 30, 45).unwrap());
        assert!("12:30".parse::<WallTime>().is_err());
    }

    #[test]
    fn test_naive_time_truncates_subseconds() {
        let naive = NaiveTime::from_hms_milli_opt(13, 17, 1, 999).unwrap();
        let t = WallTime::from(naive);
        assert_eq!(t, WallTime::new(13, 17, 1).unwrap());
        assert_eq!(NaiveTime::from(t), NaiveTime::from_hms_opt(13, 17, 1).unwrap());
    }

    #[test]
    fn test_naive_time_leap_second() {
        let naive = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert_eq!(WallTime::from(naive).second(), 59);
    }

    #[test]
    fn test_serde_as_string() {
        let t = WallTime::new(9, 8, 7).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:08:07\"");
        let back: WallTime = serde_json::from_str("\"09:08:07\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<WallTime>("\"9:8:7\"").is_err());
    }

    #[test]
    fn test_ordering() {
        let a = WallTime::new(1, 0, 0).unwrap();
        let b = WallTime::new(0, 59, 59).unwrap();
        assert!(b < a);
    }
}
