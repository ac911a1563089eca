//! SAMBUCKS Renderers
//!
//! Pure functions from simulation snapshots to surface calls:
//!
//! - **Chart**: grid, polyline of the rolling series, last-value flag
//! - **Tables**: watchlist, ticker strip, blotter, news panel, breaking banner
//!
//! Renderers keep no state of their own. Two surfaces ship with the crate:
//! [`RecordingSurface`] for headless assertions and [`TuiSurface`], a
//! ratatui surface for the terminal host.

pub mod chart;
pub mod format;
pub mod recording;
pub mod tables;
pub mod tui;

pub use chart::{ChartLayout, ChartRenderer};
pub use recording::{DrawCommand, RecordingSurface};
pub use tables::{blotter_rows, headline_rows, news_rows, ticker_strip_rows, watchlist_rows};
pub use tui::TuiSurface;
