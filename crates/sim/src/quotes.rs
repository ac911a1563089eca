//! Quotes - per-refresh figures for the watchlist and ticker strip
//!
//! Two display modes for the change column and strip glyph:
//! - [`ChangeDisplay::Cosmetic`]: a fresh random figure per refresh, unrelated
//!   to how the price actually moved
//! - [`ChangeDisplay::Tracked`]: the real percent move since the previous
//!   refresh, with the glyph following its sign
//!
//! Volume is display noise in both modes.

use sambucks_core::{Price, Symbol};
use sambucks_ports::RandomSource;
use serde::{Deserialize, Serialize};

use crate::market::MarketState;

/// How the watchlist change column and ticker-strip glyphs are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDisplay {
    /// Random change in [-2%, 2%) and a coin-flip glyph on every refresh
    Cosmetic,
    /// Change and glyph follow the real price move since the last refresh
    #[default]
    Tracked,
}

/// Up/down marker shown next to a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }

    /// Zero counts as up
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// One watchlist line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub price: Price,
    pub change_pct: f64,
    pub volume: u64,
}

/// One ticker-strip badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripQuote {
    pub symbol: Symbol,
    pub price: Price,
    pub direction: Direction,
}

/// Everything the watchlist and ticker strip show for one refresh
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteBoard {
    pub quotes: Vec<Quote>,
    pub strip: Vec<StripQuote>,
}

/// Samples a [`QuoteBoard`] from the market on each refresh
#[derive(Debug, Clone)]
pub struct QuoteSampler {
    mode: ChangeDisplay,
    /// Prices at the previous refresh, in ticker order
    reference: Vec<Price>,
}

impl QuoteSampler {
    /// Largest cosmetic change, in percent
    pub const COSMETIC_CHANGE_PCT: f64 = 2.0;
    pub const MIN_VOLUME: f64 = 1000.0;
    pub const VOLUME_SPAN: f64 = 900_000.0;

    /// Start tracking from the market's current prices
    pub fn new(mode: ChangeDisplay, market: &MarketState) -> Self {
        Self {
            mode,
            reference: market.prices(),
        }
    }

    pub fn mode(&self) -> ChangeDisplay {
        self.mode
    }

    pub fn sample<R: RandomSource + ?Sized>(
        &mut self,
        market: &MarketState,
        rng: &mut R,
    ) -> QuoteBoard {
        let changes: Vec<f64> = match self.mode {
            ChangeDisplay::Cosmetic => Vec::new(),
            ChangeDisplay::Tracked => market
                .tickers()
                .iter()
                .enumerate()
                .map(|(i, t)| match self.reference.get(i) {
                    Some(&prev) if prev > 0.0 => (t.price - prev) / prev * 100.0,
                    _ => 0.0,
                })
                .collect(),
        };

        let quotes = market
            .tickers()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let change_pct = match self.mode {
                    ChangeDisplay::Cosmetic => {
                        (rng.next_f64() * 2.0 - 1.0) * Self::COSMETIC_CHANGE_PCT
                    }
                    ChangeDisplay::Tracked => changes[i],
                };
                let volume = (Self::MIN_VOLUME + rng.next_f64() * Self::VOLUME_SPAN).floor() as u64;
                Quote {
                    symbol: t.symbol.clone(),
                    price: t.price,
                    change_pct,
                    volume,
                }
            })
            .collect();

        let strip = market
            .tickers()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let direction = match self.mode {
                    ChangeDisplay::Cosmetic => {
                        if rng.coin() {
                            Direction::Up
                        } else {
                            Direction::Down
                        }
                    }
                    ChangeDisplay::Tracked => Direction::from_change(changes[i]),
                };
                StripQuote {
                    symbol: t.symbol.clone(),
                    price: t.price,
                    direction,
                }
            })
            .collect();

        self.reference = market.prices();
        QuoteBoard { quotes, strip }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRandom, SeededRandom};
    use sambucks_core::Ticker;

    fn market() -> MarketState {
        MarketState::new(vec![
            Ticker::new("SAM01", 10.0, 1.0),
            Ticker::new("SAM02", 20.0, 1.0),
        ])
    }

    #[test]
    fn test_cosmetic_values_are_noise() {
        let market = market();
        let mut sampler = QuoteSampler::new(ChangeDisplay::Cosmetic, &market);
        // watchlist: change, volume per ticker; strip: coin per ticker
        let mut rng = ScriptedRandom::new(vec![1.0, 0.0, 0.0, 0.5, 0.9, 0.1]);

        let board = sampler.sample(&market, &mut rng);

        assert!(board.quotes[0].change_pct > 1.99);
        assert_eq!(board.quotes[0].volume, 1000);
        assert_eq!(board.quotes[1].change_pct, -2.0);
        assert_eq!(board.quotes[1].volume, 451_000);
        assert_eq!(board.strip[0].direction, Direction::Up);
        assert_eq!(board.strip[1].direction, Direction::Down);
        // Real prices are shown regardless of the noise
        assert_eq!(board.strip[1].price, 20.0);
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn test_cosmetic_range() {
        let market = market();
        let mut sampler = QuoteSampler::new(ChangeDisplay::Cosmetic, &market);
        let mut rng = SeededRandom::with_seed(8);
        for _ in 0..200 {
            let board = sampler.sample(&market, &mut rng);
            for q in &board.quotes {
                assert!((-2.0..2.0).contains(&q.change_pct));
                assert!((1000..901_000).contains(&q.volume));
            }
        }
    }

    #[test]
    fn test_tracked_change_follows_price() {
        let mut market = market();
        let mut sampler = QuoteSampler::new(ChangeDisplay::Tracked, &market);
        let mut rng = ScriptedRandom::constant(0.0);

        market.tickers_mut()[0].set_price(11.0);
        market.tickers_mut()[1].set_price(19.0);
        let board = sampler.sample(&market, &mut rng);

        assert!((board.quotes[0].change_pct - 10.0).abs() < 1e-9);
        assert!((board.quotes[1].change_pct + 5.0).abs() < 1e-9);
        assert_eq!(board.strip[0].direction, Direction::Up);
        assert_eq!(board.strip[1].direction, Direction::Down);
        // Only the volumes draw from the RNG
        assert_eq!(rng.draws(), 2);

        // Unchanged since the last refresh
        let board = sampler.sample(&market, &mut rng);
        assert_eq!(board.quotes[0].change_pct, 0.0);
        assert_eq!(board.strip[0].direction, Direction::Up);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Direction::Up.glyph(), "▲");
        assert_eq!(Direction::Down.glyph(), "▼");
        assert_eq!(Direction::from_change(0.0), Direction::Up);
    }
}
