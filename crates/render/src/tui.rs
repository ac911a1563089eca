//! Terminal surface - the dashboard drawn with ratatui widgets
//!
//! Chart calls are kept as a scene (grid, polyline, label) in surface pixel
//! coordinates and painted onto a braille [`Canvas`] at draw time. Table
//! views become [`Table`] and [`Paragraph`] widgets.

use std::collections::HashMap;
use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Row as TuiRow, Table, Widget,
        canvas::{Canvas, Line as CanvasLine, Rectangle},
    },
};
use sambucks_ports::{ChartSurface, GridSpec, Label, Point, RowSet, TableKind, TableSurface, Tone};

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Neutral => Style::default(),
        Tone::Up => Style::default().fg(Color::Green),
        Tone::Down => Style::default().fg(Color::Red),
    }
}

/// Dashboard surface for a ratatui terminal
#[derive(Debug, Clone)]
pub struct TuiSurface {
    width: f64,
    height: f64,
    blotter_lines: usize,
    grid: Option<GridSpec>,
    polyline: Vec<Point>,
    label: Option<Label>,
    tables: HashMap<TableKind, RowSet>,
}

impl TuiSurface {
    /// `width` x `height` is the pixel extent the chart renderer draws into
    pub fn new(width: f64, height: f64, blotter_lines: usize) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            blotter_lines,
            grid: None,
            polyline: Vec::new(),
            label: None,
            tables: HashMap::new(),
        }
    }

    pub fn table(&self, kind: TableKind) -> Option<&RowSet> {
        self.tables.get(&kind)
    }

    /// Paint the whole dashboard into `area`
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [banner, strip, middle, bottom] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(self.blotter_lines as u16 + 3),
            ])
            .areas(area);
        let [chart, watchlist] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(middle);
        let [blotter, news] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(bottom);

        self.render_banner(banner, buf);
        self.render_strip(strip, buf);
        self.render_chart(chart, buf);
        self.render_table(TableKind::Watchlist, "Watchlist", usize::MAX, watchlist, buf);
        self.render_table(TableKind::Blotter, "Blotter", self.blotter_lines, blotter, buf);
        self.render_news(news, buf);
    }

    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let text = self
            .table(TableKind::Headline)
            .and_then(|t| t.rows.first())
            .map(|r| r.texts().join(" "))
            .unwrap_or_default();
        Paragraph::new(Line::from(vec![
            Span::styled(
                " BREAKING ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::raw(text),
        ]))
        .render(area, buf);
    }

    fn render_strip(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if let Some(strip) = self.table(TableKind::TickerStrip) {
            for row in &strip.rows {
                for cell in &row.cells {
                    spans.push(Span::styled(cell.text.clone(), tone_style(cell.tone)));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
            }
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let (width, height) = (self.width, self.height);
        // Surface y grows down, canvas y grows up
        let flip = |y: f64| height - y;

        Canvas::default()
            .block(Block::default().title("SAM01").borders(Borders::ALL))
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                if let Some(grid) = &self.grid {
                    for x in grid.columns() {
                        ctx.draw(&CanvasLine::new(x, 0.0, x, height, Color::DarkGray));
                    }
                    for y in grid.rows() {
                        ctx.draw(&CanvasLine::new(0.0, flip(y), width, flip(y), Color::DarkGray));
                    }
                }
                ctx.layer();
                for pair in self.polyline.windows(2) {
                    ctx.draw(&CanvasLine::new(
                        pair[0].x,
                        flip(pair[0].y),
                        pair[1].x,
                        flip(pair[1].y),
                        Color::Cyan,
                    ));
                }
                if let Some(label) = &self.label {
                    ctx.layer();
                    ctx.draw(&Rectangle {
                        x: label.origin.x,
                        y: flip(label.origin.y + label.height),
                        width: label.width,
                        height: label.height,
                        color: Color::Yellow,
                    });
                    ctx.print(
                        label.anchor.x,
                        flip(label.anchor.y),
                        Line::styled(label.text.clone(), Style::default().fg(Color::Yellow)),
                    );
                }
            })
            .render(area, buf);
    }

    fn render_table(&self, kind: TableKind, title: &str, limit: usize, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        let Some(set) = self.table(kind) else {
            block.render(area, buf);
            return;
        };

        let shown: Vec<_> = set.rows.iter().take(limit).collect();
        let columns = set
            .header
            .len()
            .max(shown.iter().map(|r| r.cells.len()).max().unwrap_or(0));
        let widths: Vec<Constraint> = (0..columns)
            .map(|i| {
                let cells = shown.iter().filter_map(|r| r.cells.get(i)).map(|c| c.text.chars().count());
                let header = set.header.get(i).map(|h| h.chars().count()).unwrap_or(0);
                Constraint::Length(cells.chain(std::iter::once(header)).max().unwrap_or(0) as u16)
            })
            .collect();

        let rows = shown.into_iter().map(|r| {
            TuiRow::new(r.cells.iter().map(|c| {
                ratatui::widgets::Cell::from(c.text.clone()).style(tone_style(c.tone))
            }))
        });
        Table::new(rows, widths)
            .header(
                TuiRow::new(set.header.iter().cloned())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }

    fn render_news(&self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .table(TableKind::News)
            .map(|set| {
                set.rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let title = row.cells.first().map(|c| c.text.clone()).unwrap_or_default();
                        let body = row.cells.get(1).map(|c| c.text.clone()).unwrap_or_default();
                        // Lead story stands out
                        let title_style = if i == 0 {
                            Style::default().add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        Line::from(vec![
                            Span::styled(title, title_style),
                            Span::styled(format!("  {body}"), Style::default().fg(Color::DarkGray)),
                        ])
                    })
                    .collect()
            })
            .unwrap_or_default();
        Paragraph::new(lines)
            .block(Block::default().title("News").borders(Borders::ALL))
            .render(area, buf);
    }
}

impl ChartSurface for TuiSurface {
    fn clear(&mut self) {
        self.grid = None;
        self.polyline.clear();
        self.label = None;
    }

    fn draw_grid(&mut self, grid: &GridSpec) {
        self.grid = Some(*grid);
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        self.polyline = points.to_vec();
    }

    fn draw_label(&mut self, label: &Label) {
        self.label = Some(label.clone());
    }
}

impl TableSurface for TuiSurface {
    fn render_rows(&mut self, rows: &RowSet) {
        self.tables.insert(rows.kind, rows.clone());
    }
}

/// Raw mode plus alternate screen
pub fn init() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undo [`init`]; needs no terminal handle so it also works from a panic hook
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
