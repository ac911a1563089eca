use sambucks_core::Timestamp;

/// Port for time abstraction
///
/// This allows the scheduler to use different time sources:
/// - Real system time for the terminal host
/// - Scaled simulation time for demos
/// - Fixed time, advanced by hand, for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
