//! SAMBUCKS Runner - hosts the simulated market dashboard
//!
//! - **Bootstrap**: feed document and seeded ticker arrays into a payload
//! - **Config**: cadences, seeds and sizing from JSON
//! - **Scheduler**: frame loop plus named periodic tasks on one clock
//! - **Dashboard**: simulation behaviors paired with their views
//! - **Host**: tokio driver with a shutdown signal
//!
//! ## Architecture
//!
//! ```text
//!   feed.json ──┐        ┌── config.json
//!               ▼        ▼
//!           ┌────────────────┐
//!           │   Bootstrap    │  SeedPayload
//!           └───────┬────────┘
//!                   ▼
//!           ┌────────────────┐   poll   ┌────────────────┐
//!           │   Scheduler    │ ───────▶ │   Dashboard    │
//!           │ (Clock-driven) │          │ Simulation +   │
//!           └───────▲────────┘          │ Surface        │
//!                   │ tick              └────────────────┘
//!           ┌───────┴────────┐
//!           │ DashboardHost  │ ◀── shutdown (watch)
//!           └────────────────┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod host;
pub mod scheduler;

// Re-export main types
pub use bootstrap::{FeedDocument, MarketSeed, build_payload, default_names, default_stories};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, HEADLINE_TASK, ORDERS_TASK, WATCHLIST_TASK, schedule};
pub use error::{ConfigError, FeedError, RunnerError};
pub use host::DashboardHost;
pub use scheduler::{FRAME_TASK, Scheduler, TaskFn};
