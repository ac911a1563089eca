//! SAMBUCKS Clock Infrastructure
//!
//! Time sources for the dashboard scheduler:
//!
//! - [`SystemClock`]: wall-clock time for the terminal host
//! - [`WorldClock`]: frozen virtual time that tests move forward by hand
//!
//! ## Usage
//!
//! ```ignore
//! use sambucks_clock::WorldClock;
//! use chrono::{Duration, Utc};
//!
//! let world = WorldClock::fixed(Utc::now());
//! world.advance(Duration::seconds(6)); // one watchlist refresh later
//! ```

mod system;
mod world;

pub use system::SystemClock;
pub use world::WorldClock;

// Re-export the Clock trait for convenience
pub use sambucks_ports::Clock;
