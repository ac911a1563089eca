use chrono::Utc;
use sambucks_core::Timestamp;
use sambucks_ports::Clock;

/// Wall clock used by the terminal host
///
/// Blotter timestamps and scheduler deadlines follow real time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
