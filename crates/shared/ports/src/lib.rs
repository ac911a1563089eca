//! SAMBUCKS Ports
//!
//! Port definitions (traits) for the SAMBUCKS dashboard simulation.
//! These define the boundaries between the simulation core, its time and
//! randomness sources, and whatever host draws the dashboard.

mod clock;
mod random;
mod surface;

pub use clock::Clock;
pub use random::RandomSource;
pub use surface::{
    Cell, ChartSurface, DashboardSurface, GridSpec, Label, Point, Row, RowSet, TableKind,
    TableSurface, Tone,
};
