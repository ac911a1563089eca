//! Error types for the runner crate

use sambucks_sim::SeedError;
use thiserror::Error;

/// Feed document could not be read
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Failed to read feed {path}: {error}")]
    Io { path: String, error: String },
}

/// Dashboard configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Anything that stops the dashboard from starting
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),
}
