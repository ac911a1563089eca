//! Configuration loading for the dashboard
//!
//! Every field has a default, so a partial JSON file (or none at all) works:
//!
//! ```json
//! { "order_interval_ms": 600, "simulation": { "change_display": "cosmetic" } }
//! ```

use chrono::Duration;
use sambucks_render::ChartLayout;
use sambucks_sim::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Root configuration for the dashboard host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Frame pacing for the chart loop
    pub frame_interval_ms: u64,
    /// Watchlist and ticker strip refresh
    pub watchlist_interval_ms: u64,
    /// Breaking banner rotation
    pub headline_interval_ms: u64,
    /// Synthetic order emission
    pub order_interval_ms: u64,
    /// Orders emitted before the scheduler starts
    pub initial_orders: usize,
    /// Number of simulated tickers
    pub ticker_count: usize,
    /// Seed for start prices and volatilities
    pub market_seed: u64,
    /// Seed for the running simulation; entropy when absent
    pub simulation_seed: Option<u64>,
    pub chart_width: f64,
    pub chart_height: f64,
    pub simulation: SimulationConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            watchlist_interval_ms: 6000,
            headline_interval_ms: 5000,
            order_interval_ms: 1200,
            initial_orders: 10,
            ticker_count: 10,
            market_seed: 7,
            simulation_seed: None,
            chart_width: 680.0,
            chart_height: 280.0,
            simulation: SimulationConfig::default(),
        }
    }
}

/// Longest accepted task period, one day
pub const MAX_INTERVAL_MS: u64 = 86_400_000;

fn millis(ms: u64) -> Duration {
    i64::try_from(ms)
        .ok()
        .and_then(Duration::try_milliseconds)
        .unwrap_or(Duration::MAX)
}

impl DashboardConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the scheduler or simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("frame_interval_ms", self.frame_interval_ms),
            ("watchlist_interval_ms", self.watchlist_interval_ms),
            ("headline_interval_ms", self.headline_interval_ms),
            ("order_interval_ms", self.order_interval_ms),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive")));
            }
            if value > MAX_INTERVAL_MS {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at most {MAX_INTERVAL_MS}"
                )));
            }
        }
        if self.ticker_count == 0 {
            return Err(ConfigError::Invalid("ticker_count must be positive".into()));
        }
        if self.simulation.series_capacity == 0 {
            return Err(ConfigError::Invalid(
                "simulation.series_capacity must be positive".into(),
            ));
        }
        if self.simulation.order_log_cap == 0 {
            return Err(ConfigError::Invalid(
                "simulation.order_log_cap must be positive".into(),
            ));
        }
        if !(self.chart_width > 0.0 && self.chart_height > 0.0) {
            return Err(ConfigError::Invalid("chart size must be positive".into()));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        millis(self.frame_interval_ms)
    }

    pub fn watchlist_interval(&self) -> Duration {
        millis(self.watchlist_interval_ms)
    }

    pub fn headline_interval(&self) -> Duration {
        millis(self.headline_interval_ms)
    }

    pub fn order_interval(&self) -> Duration {
        millis(self.order_interval_ms)
    }

    pub fn chart_layout(&self) -> ChartLayout {
        ChartLayout::sized(self.chart_width, self.chart_height)
    }
}
