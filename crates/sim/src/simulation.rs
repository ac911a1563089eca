//! Simulation - the owned aggregate behind the dashboard
//!
//! Holds the market, the charted series, the order log and the headline
//! cursor, plus the single RNG every generator draws from. Nothing here is
//! shared or global; the scheduler's context owns one `Simulation` and
//! mutates it from its tasks.

use sambucks_core::{Order, Story, Timestamp};
use sambucks_ports::RandomSource;
use serde::{Deserialize, Serialize};

use crate::error::SeedResult;
use crate::headline::HeadlineRotator;
use crate::market::MarketState;
use crate::order_flow::{OrderFlowConfig, OrderFlowGenerator, OrderLog};
use crate::quotes::{ChangeDisplay, QuoteBoard, QuoteSampler};
use crate::seed::SeedPayload;
use crate::series::RollingSeries;
use crate::walker::{PriceWalker, SeriesWalker};

/// Simulation sizing and display options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Length of the charted rolling series
    pub series_capacity: usize,
    /// Maximum orders kept in the blotter log
    pub order_log_cap: usize,
    /// Start the chart with a full window of history instead of one point
    pub warm_up_series: bool,
    /// Watchlist change / ticker-strip glyph derivation
    pub change_display: ChangeDisplay,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            series_capacity: 180,
            order_log_cap: 40,
            warm_up_series: true,
            change_display: ChangeDisplay::default(),
        }
    }
}

/// The whole simulated market
pub struct Simulation<R: RandomSource> {
    market: MarketState,
    series: RollingSeries,
    orders: OrderLog,
    headlines: HeadlineRotator,
    traders: Vec<String>,
    price_walker: PriceWalker,
    series_walker: SeriesWalker,
    order_flow: OrderFlowGenerator,
    quotes: QuoteSampler,
    rng: R,
    frames: u64,
}

impl<R: RandomSource> Simulation<R> {
    /// Build from a validated seed payload
    pub fn new(seed: SeedPayload, config: SimulationConfig, rng: R) -> SeedResult<Self> {
        seed.validate()?;

        let market = MarketState::new(seed.to_tickers());
        // Validation guarantees at least one ticker
        let base = market.charted().map(|t| t.price).unwrap_or_default();
        let series = if config.warm_up_series {
            RollingSeries::warmed(config.series_capacity, base)
        } else {
            RollingSeries::from_value(config.series_capacity, base)
        };
        let quotes = QuoteSampler::new(config.change_display, &market);

        log::debug!(
            "Simulation seeded: {} tickers, {} stories, {} traders",
            market.len(),
            seed.stories.len(),
            seed.names.len()
        );

        Ok(Self {
            market,
            series,
            orders: OrderLog::new(config.order_log_cap),
            headlines: HeadlineRotator::new(seed.stories),
            traders: seed.names,
            price_walker: PriceWalker::default(),
            series_walker: SeriesWalker::default(),
            order_flow: OrderFlowGenerator::new(OrderFlowConfig::default()),
            quotes,
            rng,
            frames: 0,
        })
    }

    /// One animation frame of data: the series moves first, then every
    /// ticker price.
    pub fn step_frame(&mut self) {
        self.series_walker.step(&mut self.series, &mut self.rng);
        self.price_walker.step_all(&mut self.market, &mut self.rng);
        self.frames += 1;
    }

    /// Emit one order into the log and return a copy of it
    pub fn emit_order(&mut self, now: Timestamp) -> Order {
        let order = self
            .order_flow
            .emit(&self.market, &self.traders, &mut self.rng, now);
        log::trace!(
            "Order #{} {} {} {} @ {:.2}",
            order.seq,
            order.side,
            order.quantity,
            order.symbol,
            order.price
        );
        self.orders.push(order.clone());
        order
    }

    /// Pre-populate the blotter
    pub fn seed_orders(&mut self, count: usize, now: Timestamp) {
        for _ in 0..count {
            self.emit_order(now);
        }
    }

    /// Next breaking headline
    pub fn rotate_headline(&mut self) -> Option<&Story> {
        let story = self.headlines.advance();
        if let Some(story) = story {
            log::debug!("Headline: {}", story.title);
        }
        story
    }

    /// Fresh watchlist and ticker-strip figures
    pub fn sample_quotes(&mut self) -> QuoteBoard {
        self.quotes.sample(&self.market, &mut self.rng)
    }

    pub fn market(&self) -> &MarketState {
        &self.market
    }

    pub fn series(&self) -> &RollingSeries {
        &self.series
    }

    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    pub fn headlines(&self) -> &HeadlineRotator {
        &self.headlines
    }

    pub fn stories(&self) -> &[Story] {
        self.headlines.stories()
    }

    pub fn traders(&self) -> &[String] {
        &self.traders
    }

    /// Frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn change_display(&self) -> ChangeDisplay {
        self.quotes.mode()
    }
}
