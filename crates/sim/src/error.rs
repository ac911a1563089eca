//! Error types for the simulation crate

use thiserror::Error;

/// Seed payload violations detected before the simulation starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedError {
    #[error("Seed payload has no tickers")]
    NoTickers,

    #[error(
        "Seed arrays differ in length: {tickers} tickers, {prices} prices, {volatilities} volatilities"
    )]
    LengthMismatch {
        tickers: usize,
        prices: usize,
        volatilities: usize,
    },

    #[error("Invalid start price {price} for {symbol}")]
    InvalidPrice { symbol: String, price: f64 },

    #[error("Invalid volatility {volatility} for {symbol}")]
    InvalidVolatility { symbol: String, volatility: f64 },

    #[error("Blank ticker symbol at position {0}")]
    BlankSymbol(usize),
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;
