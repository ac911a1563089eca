use sambucks_core::{Price, Ticker};

/// Current state of every simulated ticker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketState {
    tickers: Vec<Ticker>,
}

impl MarketState {
    pub fn new(tickers: Vec<Ticker>) -> Self {
        Self { tickers }
    }

    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    pub fn tickers_mut(&mut self) -> &mut [Ticker] {
        &mut self.tickers
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Look up a ticker by symbol
    pub fn get(&self, symbol: &str) -> Option<&Ticker> {
        self.tickers.iter().find(|t| t.symbol == symbol)
    }

    /// Current price for a symbol
    pub fn price_of(&self, symbol: &str) -> Option<Price> {
        self.get(symbol).map(|t| t.price)
    }

    /// Snapshot of all current prices, in ticker order
    pub fn prices(&self) -> Vec<Price> {
        self.tickers.iter().map(|t| t.price).collect()
    }

    /// The ticker whose history is charted
    pub fn charted(&self) -> Option<&Ticker> {
        self.tickers.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let market = MarketState::new(vec![
            Ticker::new("SAM01", 10.0, 1.0),
            Ticker::new("SAM02", 25.5, 0.3),
        ]);
        assert_eq!(market.price_of("SAM02"), Some(25.5));
        assert_eq!(market.price_of("NOPE"), None);
        assert_eq!(market.charted().map(|t| t.symbol.as_str()), Some("SAM01"));
        assert_eq!(market.prices(), vec![10.0, 25.5]);
    }

    #[test]
    fn test_empty_market() {
        let market = MarketState::default();
        assert!(market.is_empty());
        assert!(market.charted().is_none());
    }
}
