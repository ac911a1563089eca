//! Order Flow - synthetic trades for the blotter
//!
//! Each emission draws, in order: side, symbol, quantity, trader. The price
//! is whatever the chosen symbol currently trades at.

use sambucks_core::{Order, OrderSeq, Price, Quantity, Side, Timestamp};
use sambucks_ports::RandomSource;
use std::collections::VecDeque;

use crate::market::MarketState;

/// Price used when the drawn symbol cannot be found
pub const FALLBACK_PRICE: Price = 10.0;

/// Trader shown when the name pool is empty
pub const FALLBACK_TRADER: &str = "Trader A";

/// Configuration for order emission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderFlowConfig {
    /// Smallest quantity emitted
    pub min_quantity: Quantity,
    /// Width of the uniform quantity range above `min_quantity`
    pub quantity_span: Quantity,
}

impl Default for OrderFlowConfig {
    fn default() -> Self {
        Self {
            min_quantity: 10,
            quantity_span: 5000,
        }
    }
}

/// Emits synthetic orders from the current market state
#[derive(Debug, Clone, Default)]
pub struct OrderFlowGenerator {
    config: OrderFlowConfig,
    next_seq: OrderSeq,
}

impl OrderFlowGenerator {
    pub fn new(config: OrderFlowConfig) -> Self {
        Self {
            config,
            next_seq: 0,
        }
    }

    /// Total orders emitted so far
    pub fn emitted(&self) -> u64 {
        self.next_seq
    }

    /// Generate the next order. Never fails: unknown symbols trade at
    /// [`FALLBACK_PRICE`] and an empty pool trades as [`FALLBACK_TRADER`].
    pub fn emit<R: RandomSource + ?Sized>(
        &mut self,
        market: &MarketState,
        traders: &[String],
        rng: &mut R,
        now: Timestamp,
    ) -> Order {
        let side = if rng.coin() { Side::Buy } else { Side::Sell };

        let symbol = if market.is_empty() {
            String::new()
        } else {
            market.tickers()[rng.index(market.len())].symbol.clone()
        };

        let quantity = (self.config.min_quantity as f64
            + rng.next_f64() * self.config.quantity_span as f64)
            .floor() as Quantity;

        let price = market.price_of(&symbol).unwrap_or(FALLBACK_PRICE);

        let trader = if traders.is_empty() {
            FALLBACK_TRADER.to_string()
        } else {
            traders[rng.index(traders.len())].clone()
        };

        self.next_seq += 1;
        Order {
            seq: self.next_seq,
            time: now,
            trader,
            side,
            symbol,
            quantity,
            price,
        }
    }
}

/// Bounded, newest-first log of emitted orders
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLog {
    orders: VecDeque<Order>,
    cap: usize,
}

impl OrderLog {
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            orders: VecDeque::with_capacity(cap + 1),
            cap,
        }
    }

    /// Prepend an order, discarding the oldest ones beyond the cap.
    /// Returns how many were discarded.
    pub fn push(&mut self, order: Order) -> usize {
        self.orders.push_front(order);
        let mut evicted = 0;
        while self.orders.len() > self.cap {
            self.orders.pop_back();
            evicted += 1;
        }
        evicted
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Most recent order
    pub fn latest(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Oldest order still kept
    pub fn oldest(&self) -> Option<&Order> {
        self.orders.back()
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}
