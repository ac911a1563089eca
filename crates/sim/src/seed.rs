//! Seed payload handed to the simulation at startup

use sambucks_core::{Story, Ticker};
use serde::{Deserialize, Serialize};

use crate::error::{SeedError, SeedResult};

/// Everything the simulation needs to start
///
/// The bootstrap collaborator is expected to have defaulted `stories` and
/// `names` already; [`SeedPayload::validate`] only enforces the ticker-array
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPayload {
    pub tickers: Vec<String>,
    pub prices: Vec<f64>,
    pub volatilities: Vec<f64>,
    pub stories: Vec<Story>,
    pub names: Vec<String>,
}

impl SeedPayload {
    /// Check that the three ticker arrays line up and hold usable values
    pub fn validate(&self) -> SeedResult<()> {
        if self.tickers.is_empty() {
            return Err(SeedError::NoTickers);
        }
        if self.tickers.len() != self.prices.len() || self.tickers.len() != self.volatilities.len()
        {
            return Err(SeedError::LengthMismatch {
                tickers: self.tickers.len(),
                prices: self.prices.len(),
                volatilities: self.volatilities.len(),
            });
        }
        for (i, symbol) in self.tickers.iter().enumerate() {
            if symbol.trim().is_empty() {
                return Err(SeedError::BlankSymbol(i));
            }
            let price = self.prices[i];
            if !price.is_finite() || price <= 0.0 {
                return Err(SeedError::InvalidPrice {
                    symbol: symbol.clone(),
                    price,
                });
            }
            let volatility = self.volatilities[i];
            if !volatility.is_finite() || volatility <= 0.0 {
                return Err(SeedError::InvalidVolatility {
                    symbol: symbol.clone(),
                    volatility,
                });
            }
        }
        Ok(())
    }

    /// Zip the ticker arrays into [`Ticker`]s
    pub fn to_tickers(&self) -> Vec<Ticker> {
        self.tickers
            .iter()
            .zip(&self.prices)
            .zip(&self.volatilities)
            .map(|((symbol, &price), &volatility)| Ticker::new(symbol.clone(), price, volatility))
            .collect()
    }
}
