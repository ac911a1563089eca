//! SAMBUCKS Core Domain
//!
//! Pure domain types for the SAMBUCKS dashboard simulation.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Order, OrderSeq, Side, Story, Ticker};
pub use values::{MIN_PRICE, MIN_SERIES_VALUE, Price, Quantity, Symbol, Timestamp};
