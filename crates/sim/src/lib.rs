//! SAMBUCKS Simulation Engine
//!
//! Generates the synthetic market behind the dashboard:
//!
//! - **Walkers**: multiplicative random steps for ticker prices and the charted series
//! - **Order Flow**: synthetic trades pushed into a bounded, newest-first log
//! - **Headlines**: wraparound rotation over the story list
//! - **Quotes**: per-refresh watchlist and ticker-strip figures
//! - **Simulation**: the owned aggregate tying the above to one injected RNG
//!
//! ## Data Flow
//!
//! ```text
//!                 ┌──────────────┐
//!                 │ RandomSource │ (seeded, injected)
//!                 └──────┬───────┘
//!                        │ draws
//!        ┌───────────────┼────────────────┬─────────────────┐
//!        ▼               ▼                ▼                 ▼
//! ┌─────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//! │ PriceWalker │ │ SeriesWalker │ │  OrderFlow   │ │ QuoteSampler │
//! └──────┬──────┘ └──────┬───────┘ └──────┬───────┘ └──────┬───────┘
//!        ▼               ▼                ▼                 ▼
//!   MarketState    RollingSeries      OrderLog          QuoteBoard
//!        └───────────────┴────────┬───────┴─────────────────┘
//!                                 ▼
//!                            renderers
//! ```

pub mod error;
pub mod headline;
pub mod market;
pub mod order_flow;
pub mod quotes;
pub mod rng;
pub mod seed;
pub mod series;
pub mod simulation;
pub mod walker;

// Re-export main types
pub use error::{SeedError, SeedResult};
pub use headline::HeadlineRotator;
pub use market::MarketState;
pub use order_flow::{FALLBACK_PRICE, FALLBACK_TRADER, OrderFlowConfig, OrderFlowGenerator, OrderLog};
pub use quotes::{ChangeDisplay, Direction, Quote, QuoteBoard, QuoteSampler, StripQuote};
pub use rng::{ScriptedRandom, SeededRandom};
pub use seed::SeedPayload;
pub use series::RollingSeries;
pub use simulation::{Simulation, SimulationConfig};
pub use walker::{PriceWalker, SeriesWalker};
