//! Headless surface that records every call for assertions

use sambucks_ports::{ChartSurface, GridSpec, Label, Point, RowSet, TableKind, TableSurface};
use std::collections::HashMap;

/// One recorded chart call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Grid(GridSpec),
    Polyline(Vec<Point>),
    Label(Label),
}

impl DrawCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Clear => "clear",
            DrawCommand::Grid(_) => "grid",
            DrawCommand::Polyline(_) => "polyline",
            DrawCommand::Label(_) => "label",
        }
    }
}

/// Surface that keeps chart calls in order and the latest row set per view
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    tables: HashMap<TableKind, RowSet>,
    updates: HashMap<TableKind, usize>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded chart calls, keeping table state
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of chart redraws (one `clear` per redraw)
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline(points) => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn last_label(&self) -> Option<&Label> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Label(label) => Some(label),
            _ => None,
        })
    }

    /// Latest rows rendered for a view
    pub fn table(&self, kind: TableKind) -> Option<&RowSet> {
        self.tables.get(&kind)
    }

    /// How many times a view was rendered
    pub fn updates(&self, kind: TableKind) -> usize {
        self.updates.get(&kind).copied().unwrap_or(0)
    }
}

impl ChartSurface for RecordingSurface {
    fn clear(&mut self) {
        self.frames += 1;
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_grid(&mut self, grid: &GridSpec) {
        self.commands.push(DrawCommand::Grid(*grid));
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::Polyline(points.to_vec()));
    }

    fn draw_label(&mut self, label: &Label) {
        self.commands.push(DrawCommand::Label(label.clone()));
    }
}

impl TableSurface for RecordingSurface {
    fn render_rows(&mut self, rows: &RowSet) {
        *self.updates.entry(rows.kind).or_default() += 1;
        self.tables.insert(rows.kind, rows.clone());
    }
}
