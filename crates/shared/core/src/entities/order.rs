use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Price, Quantity, Symbol};

/// Monotonic sequence number assigned at emission
pub type OrderSeq = u64;

/// Synthetic trade shown in the blotter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub seq: OrderSeq,
    pub time: DateTime<Utc>,
    pub trader: String,
    pub side: Side,
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub price: Price,
}
