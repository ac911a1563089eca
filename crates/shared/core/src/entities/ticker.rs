use serde::{Deserialize, Serialize};

use crate::values::{MIN_PRICE, Price, Symbol};

/// A simulated listing: symbol, current price and the fixed volatility
/// that scales its random walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: Symbol,
    pub price: Price,
    pub volatility: f64,
}

impl Ticker {
    pub fn new(symbol: impl Into<Symbol>, price: Price, volatility: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price: price.max(MIN_PRICE),
            volatility,
        }
    }

    /// Set the price, clamping to the positive floor
    pub fn set_price(&mut self, price: Price) {
        self.price = price.max(MIN_PRICE);
    }
}
