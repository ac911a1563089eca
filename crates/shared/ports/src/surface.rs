use serde::{Deserialize, Serialize};

/// A point in surface pixel coordinates (origin top-left, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Background grid: full-surface lines every `step_x` / `step_y` pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: f64,
    pub height: f64,
    pub step_x: f64,
    pub step_y: f64,
}

impl GridSpec {
    /// X positions of the vertical lines
    pub fn columns(&self) -> Vec<f64> {
        steps(self.width, self.step_x)
    }

    /// Y positions of the horizontal lines
    pub fn rows(&self) -> Vec<f64> {
        steps(self.height, self.step_y)
    }
}

fn steps(extent: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut at = 0.0;
    while at < extent {
        out.push(at);
        at += step;
    }
    out
}

/// Boxed text flag, e.g. the last-price marker on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Top-left corner of the box
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Text baseline anchor
    pub anchor: Point,
    pub text: String,
}

/// Drawing capability needed by the chart renderer
pub trait ChartSurface {
    /// Wipe the surface before a new frame
    fn clear(&mut self) {}

    fn draw_grid(&mut self, grid: &GridSpec);

    fn draw_polyline(&mut self, points: &[Point]);

    fn draw_label(&mut self, label: &Label);
}

/// Coloring hint for a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Neutral,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Neutral,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Plain text of every cell, handy for assertions and text hosts
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Which dashboard view a row set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Watchlist,
    TickerStrip,
    Blotter,
    News,
    Headline,
}

/// A full replacement of one table view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSet {
    pub kind: TableKind,
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowSet {
    pub fn new(kind: TableKind, header: &[&str], rows: Vec<Row>) -> Self {
        Self {
            kind,
            header: header.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Row-based output capability (watchlist, ticker strip, blotter, news, banner)
pub trait TableSurface {
    fn render_rows(&mut self, rows: &RowSet);
}

/// Everything the dashboard draws to
pub trait DashboardSurface: ChartSurface + TableSurface {}

impl<T: ChartSurface + TableSurface> DashboardSurface for T {}
