//! Bootstrap - seed payload assembly
//!
//! Builds the payload the simulation starts from:
//! - Stories and trader names from an optional feed document, with
//!   built-in defaults for anything missing or malformed
//! - Ticker symbols, start prices and volatilities from a seeded draw

use sambucks_core::Story;
use sambucks_ports::RandomSource;
use sambucks_sim::{SeedPayload, SeedResult, SeededRandom};
use serde_json::Value;
use std::path::Path;

use crate::error::FeedError;

/// Stories shown when the feed has none
pub fn default_stories() -> Vec<Story> {
    vec![
        Story::new("SAM Index edges higher", "Traders cite strong latte demand"),
        Story::new("Robo hedger toggles on", "Latency improved to probably fine"),
        Story::new(
            "Balance sheet very green",
            "Analysts upgrade outlook to moonish",
        ),
    ]
}

/// Trader pool used when the feed has none
pub fn default_names() -> Vec<String> {
    ["Sam A", "Jamie Q", "Taylor R", "Jordan K", "Avery P", "Riley M"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

/// Stories and trader names, already sanitized and defaulted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub stories: Vec<Story>,
    pub names: Vec<String>,
}

impl Default for FeedDocument {
    fn default() -> Self {
        Self {
            stories: default_stories(),
            names: default_names(),
        }
    }
}

impl FeedDocument {
    /// Read and parse a feed file. Only I/O failures are errors; unusable
    /// content falls back to the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| FeedError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    /// Parse feed JSON, never failing
    pub fn parse(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                log::warn!("Feed is not valid JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            log::warn!("Feed root is not an object, using defaults");
            return Self::default();
        };

        let stories = match root.get("stories") {
            None => Vec::new(),
            Some(Value::Array(items)) => sanitize_stories(items.iter()),
            // Stories keyed by id
            Some(Value::Object(map)) => sanitize_stories(map.values()),
            Some(_) => {
                log::warn!("Feed stories are neither a list nor a map, using defaults");
                default_stories()
            }
        };
        let stories = if stories.is_empty() {
            log::warn!("Feed has no usable stories, using defaults");
            default_stories()
        } else {
            stories
        };

        let names = match root.get("names") {
            None => default_names(),
            Some(Value::Array(items)) => {
                let names: Vec<String> = items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string)
                    .collect();
                if names.is_empty() {
                    log::warn!("Feed has no usable trader names, using defaults");
                    default_names()
                } else {
                    names
                }
            }
            Some(_) => {
                log::warn!("Feed names are not a list, using defaults");
                default_names()
            }
        };

        Self { stories, names }
    }
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn sanitize_stories<'a>(items: impl Iterator<Item = &'a Value>) -> Vec<Story> {
    items
        .filter_map(Value::as_object)
        .filter_map(|s| Story::sanitized(&field_text(s.get("title")), &field_text(s.get("body"))))
        .collect()
}

/// Ticker arrays for the simulated listings
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeed {
    pub tickers: Vec<String>,
    pub prices: Vec<f64>,
    pub volatilities: Vec<f64>,
}

impl MarketSeed {
    pub const MIN_PRICE: f64 = 4.0;
    pub const MAX_PRICE: f64 = 250.0;
    pub const MIN_VOLATILITY: f64 = 0.2;
    pub const MAX_VOLATILITY: f64 = 2.0;

    /// `SAM01..SAMnn`, all prices drawn first, then all volatilities
    pub fn generate(seed: u64, count: usize) -> Self {
        let mut rng = SeededRandom::with_seed(seed);
        let tickers = (1..=count).map(|i| format!("SAM{i:02}")).collect();
        let prices = (0..count)
            .map(|_| round2(rng.between(Self::MIN_PRICE, Self::MAX_PRICE)))
            .collect();
        let volatilities = (0..count)
            .map(|_| round2(rng.between(Self::MIN_VOLATILITY, Self::MAX_VOLATILITY)))
            .collect();
        Self {
            tickers,
            prices,
            volatilities,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Combine market and feed into a validated payload
pub fn build_payload(market: MarketSeed, feed: FeedDocument) -> SeedResult<SeedPayload> {
    let payload = SeedPayload {
        tickers: market.tickers,
        prices: market.prices,
        volatilities: market.volatilities,
        stories: feed.stories,
        names: feed.names,
    };
    payload.validate()?;
    log::info!(
        "Seed ready: {} tickers, {} stories, {} traders",
        payload.tickers.len(),
        payload.stories.len(),
        payload.names.len()
    );
    Ok(payload)
}
