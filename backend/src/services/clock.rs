//! Sources of the current time.

use super::berlin_clock;
use crate::models::WallTime;

/// Supplies the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> WallTime;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        berlin_clock::now()
    }
}

/// Clock frozen at a single instant, for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(WallTime);

impl FixedClock {
    pub fn new(time: WallTime) -> Self {
        Self(time)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_fixed_clock() {
        let t = WallTime::new(13, 17, 1).unwrap();
        let clock = FixedClock::new(t);
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), t);
    }

    #[test]
    fn test_system_clock_as_trait_object() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let now = clock.now();
        assert!(now.hour() <= 23);
    }
}
