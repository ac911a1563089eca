//! Random-walk steppers for ticker prices and the charted series

use sambucks_core::{MIN_PRICE, MIN_SERIES_VALUE, Price, Ticker};
use sambucks_ports::RandomSource;

use crate::market::MarketState;
use crate::series::RollingSeries;

/// Multiplicative price walk scaled by each ticker's volatility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceWalker {
    /// Percent move per unit of volatility at the extreme draw
    pub step_pct: f64,
}

impl Default for PriceWalker {
    fn default() -> Self {
        Self { step_pct: 0.05 }
    }
}

impl PriceWalker {
    /// Fractional drift for one draw: zero when the draw is exactly 0.5
    pub fn drift(&self, draw: f64, volatility: f64) -> f64 {
        (draw - 0.5) * volatility * self.step_pct / 100.0
    }

    /// Next price for one draw, never below the price floor
    pub fn next_price(&self, price: Price, volatility: f64, draw: f64) -> Price {
        (price * (1.0 + self.drift(draw, volatility))).max(MIN_PRICE)
    }

    /// Advance one ticker by one step
    pub fn step<R: RandomSource + ?Sized>(&self, ticker: &mut Ticker, rng: &mut R) {
        let draw = rng.next_f64();
        ticker.set_price(self.next_price(ticker.price, ticker.volatility, draw));
    }

    /// Advance every ticker once, in ticker order
    pub fn step_all<R: RandomSource + ?Sized>(&self, market: &mut MarketState, rng: &mut R) {
        for ticker in market.tickers_mut() {
            self.step(ticker, rng);
        }
    }
}

/// Random walk feeding the rolling chart series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesWalker {
    /// Largest percent move in either direction
    pub max_move_pct: f64,
}

impl Default for SeriesWalker {
    fn default() -> Self {
        Self { max_move_pct: 0.25 }
    }
}

impl SeriesWalker {
    /// Next value from the previous one and a draw
    pub fn next_value(&self, last: f64, draw: f64) -> f64 {
        let v = (draw - 0.5) * self.max_move_pct * 2.0;
        (last * (1.0 + v / 100.0)).max(MIN_SERIES_VALUE)
    }

    /// Append one value derived from the newest one. An empty series has
    /// nothing to walk from and is left untouched.
    pub fn step<R: RandomSource + ?Sized>(&self, series: &mut RollingSeries, rng: &mut R) {
        let Some(last) = series.last() else {
            return;
        };
        let draw = rng.next_f64();
        series.push(self.next_value(last, draw));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRandom, SeededRandom};

    #[test]
    fn test_centered_draw_leaves_price_unchanged() {
        let walker = PriceWalker::default();
        let mut ticker = Ticker::new("SAM01", 10.00, 1.0);
        let mut rng = ScriptedRandom::constant(0.5);

        walker.step(&mut ticker, &mut rng);

        assert_eq!(ticker.price, 10.00);
    }

    #[test]
    fn test_drift_bounds() {
        let walker = PriceWalker::default();
        // Extreme draws move at most volatility * 0.025%
        assert!((walker.drift(0.0, 2.0) + 0.0005).abs() < 1e-12);
        assert!(walker.drift(0.999, 2.0) < 0.0005);
    }

    #[test]
    fn test_price_never_below_floor() {
        let walker = PriceWalker { step_pct: 100_000.0 };
        let mut ticker = Ticker::new("SAM01", 0.5, 2.0);
        let mut rng = SeededRandom::with_seed(3);

        for _ in 0..10_000 {
            walker.step(&mut ticker, &mut rng);
            assert!(ticker.price >= MIN_PRICE);
        }
    }

    #[test]
    fn test_step_all_uses_one_draw_per_ticker() {
        let walker = PriceWalker::default();
        let mut market = MarketState::new(vec![
            Ticker::new("SAM01", 10.0, 1.0),
            Ticker::new("SAM02", 20.0, 1.0),
        ]);
        let mut rng = ScriptedRandom::new(vec![1.0, 0.0]);

        walker.step_all(&mut market, &mut rng);

        assert_eq!(rng.draws(), 2);
        assert!(market.tickers()[0].price > 10.0);
        assert!(market.tickers()[1].price < 20.0);
    }

    #[test]
    fn test_series_step_formula() {
        let walker = SeriesWalker::default();
        // draw 1.0 => +0.25%
        assert!((walker.next_value(100.0, 1.0) - 100.25).abs() < 1e-9);
        // draw 0.0 => -0.25%
        assert!((walker.next_value(100.0, 0.0) - 99.75).abs() < 1e-9);
        assert_eq!(walker.next_value(0.1, 0.0), MIN_SERIES_VALUE);
    }

    #[test]
    fn test_series_fills_without_premature_eviction() {
        let walker = SeriesWalker::default();
        let mut series = RollingSeries::from_value(180, 42.0);
        let mut rng = SeededRandom::with_seed(11);

        for step in 1..180 {
            walker.step(&mut series, &mut rng);
            assert_eq!(series.len(), 1 + step);
        }

        assert_eq!(series.len(), 180);
        assert_eq!(series.first(), Some(42.0));

        walker.step(&mut series, &mut rng);
        assert_eq!(series.len(), 180);
        assert_ne!(series.first(), Some(42.0));
    }

    #[test]
    fn test_series_eviction_drops_oldest_only() {
        let walker = SeriesWalker::default();
        let mut series = RollingSeries::with_capacity(4);
        for v in [1.0, 2.0, 3.0, 4.0] {
            series.push(v);
        }
        let mut rng = ScriptedRandom::constant(0.5);

        walker.step(&mut series, &mut rng);

        assert_eq!(series.to_vec(), vec![2.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn test_empty_series_is_not_stepped() {
        let walker = SeriesWalker::default();
        let mut series = RollingSeries::with_capacity(4);
        let mut rng = ScriptedRandom::constant(0.5);

        walker.step(&mut series, &mut rng);

        assert!(series.is_empty());
        assert_eq!(rng.draws(), 0);
    }
}
