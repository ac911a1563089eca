use chrono::{DateTime, Utc};

/// Price value
pub type Price = f64;

/// Order quantity in whole units
pub type Quantity = u64;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol, e.g. `SAM01`
pub type Symbol = String;

/// Floor applied to every ticker price after a walk step
pub const MIN_PRICE: Price = 0.01;

/// Floor applied to every charted series value
pub const MIN_SERIES_VALUE: f64 = 0.1;
