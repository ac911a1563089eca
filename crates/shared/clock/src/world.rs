use chrono::Duration;
use sambucks_core::Timestamp;
use sambucks_ports::Clock;
use std::sync::{Arc, PoisonError, RwLock};

/// Virtual clock driving the dashboard scheduler in tests
///
/// Time is frozen until moved with [`WorldClock::advance`] or
/// [`WorldClock::set_time`], so scheduler runs are deterministic.
pub struct WorldClock {
    now: RwLock<Timestamp>,
}

impl WorldClock {
    /// Create a frozen clock starting at `start`
    pub fn fixed(start: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            now: RwLock::new(start),
        })
    }

    /// Move time forward; negative durations are ignored
    pub fn advance(&self, duration: Duration) {
        if duration <= Duration::zero() {
            return;
        }
        let mut now = self.now.write().unwrap_or_else(PoisonError::into_inner);
        match now.checked_add_signed(duration) {
            Some(next) => *now = next,
            None => log::warn!("WorldClock cannot advance by {}", duration),
        }
    }

    /// Jump to `time`, backwards included
    pub fn set_time(&self, time: Timestamp) {
        *self.now.write().unwrap_or_else(PoisonError::into_inner) = time;
    }
}

impl Clock for WorldClock {
    fn now(&self) -> Timestamp {
        *self.now.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn name(&self) -> &str {
        "WorldClock"
    }
}
