//! Chart - projects the rolling series onto a pixel surface

use sambucks_ports::{ChartSurface, GridSpec, Label, Point};
use sambucks_sim::RollingSeries;

/// Surface geometry for the price chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Vertical grid line spacing
    pub grid_x: f64,
    /// Horizontal grid line spacing
    pub grid_y: f64,
    /// Gap between the lowest value and the bottom edge
    pub bottom_margin: f64,
    /// Total vertical space left out of the plot (top + bottom)
    pub vertical_margin: f64,
    /// Distance from the right edge to the flag's left side
    pub flag_offset: f64,
    pub flag_width: f64,
    pub flag_height: f64,
    /// Text inset from the flag's left side
    pub flag_padding: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::sized(680.0, 280.0)
    }
}

impl ChartLayout {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            grid_x: 64.0,
            grid_y: 56.0,
            bottom_margin: 30.0,
            vertical_margin: 40.0,
            flag_offset: 90.0,
            flag_width: 84.0,
            flag_height: 20.0,
            flag_padding: 8.0,
        }
    }

    pub fn grid(&self) -> GridSpec {
        GridSpec {
            width: self.width,
            height: self.height,
            step_x: self.grid_x,
            step_y: self.grid_y,
        }
    }
}

/// Value range mapped onto the plot height
#[derive(Debug, Clone, Copy, PartialEq)]
struct Domain {
    min: f64,
    scale: f64,
}

/// Draws the rolling series: grid, then line, then last-value flag
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartRenderer {
    layout: ChartLayout,
}

impl ChartRenderer {
    pub fn new(layout: ChartLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    fn domain(&self, values: &[f64]) -> Option<Domain> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        // Flat series: unit span keeps the division defined
        let span = if max > min { max - min } else { 1.0 };
        Some(Domain {
            min,
            scale: (self.layout.height - self.layout.vertical_margin) / span,
        })
    }

    fn y_of(&self, domain: Domain, value: f64) -> f64 {
        self.layout.height - self.layout.bottom_margin - (value - domain.min) * domain.scale
    }

    /// Surface coordinates for each value, oldest at the left edge and
    /// newest at the right. Fewer than two values produce no points.
    pub fn project(&self, values: &[f64]) -> Vec<Point> {
        if values.len() < 2 {
            return Vec::new();
        }
        let Some(domain) = self.domain(values) else {
            return Vec::new();
        };
        let step = self.layout.width / (values.len() - 1) as f64;
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64 * step, self.y_of(domain, v)))
            .collect()
    }

    /// Flag next to the newest value showing it with two decimals
    pub fn last_value_label(&self, values: &[f64]) -> Option<Label> {
        let domain = self.domain(values)?;
        let last = *values.last()?;
        let y = self.y_of(domain, last);
        let left = self.layout.width - self.layout.flag_offset;
        Some(Label {
            origin: Point::new(left, y - self.layout.flag_height / 2.0),
            width: self.layout.flag_width,
            height: self.layout.flag_height,
            anchor: Point::new(left + self.layout.flag_padding, y + 5.0),
            text: format!("${last:.2}"),
        })
    }

    /// Redraw the whole chart for the given values
    pub fn render_values<S: ChartSurface + ?Sized>(&self, values: &[f64], surface: &mut S) {
        surface.clear();
        surface.draw_grid(&self.layout.grid());

        let points = self.project(values);
        if points.is_empty() {
            log::trace!("Chart has {} values, polyline skipped", values.len());
        } else {
            surface.draw_polyline(&points);
        }

        if let Some(label) = self.last_value_label(values) {
            surface.draw_label(&label);
        }
    }

    pub fn render<S: ChartSurface + ?Sized>(&self, series: &RollingSeries, surface: &mut S) {
        self.render_values(&series.to_vec(), surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn test_projection_spans_surface() {
        let chart = ChartRenderer::default();
        let points = chart.project(&[10.0, 20.0, 15.0]);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0.0, 250.0));
        assert_eq!(points[1], Point::new(340.0, 10.0));
        assert_eq!(points[2], Point::new(680.0, 130.0));
    }

    #[test]
    fn test_flat_series_uses_unit_span() {
        let chart = ChartRenderer::default();
        let points = chart.project(&[5.0, 5.0, 5.0, 5.0]);

        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| p.y == 250.0));
        assert!(points.iter().all(|p| p.x.is_finite()));
    }

    #[test]
    fn test_label_tracks_last_point() {
        let chart = ChartRenderer::default();
        let label = chart.last_value_label(&[10.0, 20.0]).unwrap();

        assert_eq!(label.text, "$20.00");
        assert_eq!(label.origin, Point::new(590.0, 0.0));
        assert_eq!(label.anchor, Point::new(598.0, 15.0));
        assert_eq!(label.width, 84.0);
        assert_eq!(label.height, 20.0);
    }

    #[test]
    fn test_render_order() {
        let chart = ChartRenderer::default();
        let mut surface = RecordingSurface::new();

        chart.render_values(&[1.0, 2.0, 3.0], &mut surface);

        let kinds: Vec<&str> = surface.commands().iter().map(DrawCommand::kind).collect();
        assert_eq!(kinds, vec!["clear", "grid", "polyline", "label"]);
    }

    #[test]
    fn test_short_series_do_not_fail() {
        let _ = env_logger::try_init();
        let chart = ChartRenderer::default();

        let mut surface = RecordingSurface::new();
        chart.render_values(&[], &mut surface);
        assert_eq!(surface.polylines().count(), 0);
        assert!(surface.last_label().is_none());

        let mut surface = RecordingSurface::new();
        chart.render_values(&[42.0], &mut surface);
        assert_eq!(surface.polylines().count(), 0);
        let label = surface.last_label().unwrap();
        assert_eq!(label.text, "$42.00");
        assert_eq!(label.anchor.y, 255.0);
    }
}
