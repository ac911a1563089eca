//! Dashboard - the simulation wired to a surface
//!
//! Each method is one scheduled behavior: mutate the simulation, then push
//! the affected view to the surface. [`schedule`] registers them on a
//! [`Scheduler`] with the configured cadences.

use sambucks_core::{Order, Story, Timestamp};
use sambucks_ports::{Clock, DashboardSurface, RandomSource};
use sambucks_render::{
    ChartRenderer, blotter_rows, headline_rows, news_rows, ticker_strip_rows, watchlist_rows,
};
use sambucks_sim::{QuoteBoard, Simulation};
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::scheduler::Scheduler;

/// Name of the watchlist / ticker strip task
pub const WATCHLIST_TASK: &str = "watchlist";
/// Name of the breaking banner task
pub const HEADLINE_TASK: &str = "headline";
/// Name of the order flow task
pub const ORDERS_TASK: &str = "orders";

/// Simulation plus the surface it is drawn on
pub struct Dashboard<R: RandomSource, S: DashboardSurface> {
    simulation: Simulation<R>,
    surface: S,
    chart: ChartRenderer,
    blotter_limit: usize,
}

impl<R: RandomSource, S: DashboardSurface> Dashboard<R, S> {
    pub fn new(simulation: Simulation<R>, surface: S, chart: ChartRenderer) -> Self {
        let blotter_limit = simulation.orders().cap();
        Self {
            simulation,
            surface,
            chart,
            blotter_limit,
        }
    }

    /// Cap the blotter rows pushed to the surface (never above the log cap)
    pub fn with_blotter_limit(mut self, limit: usize) -> Self {
        self.blotter_limit = limit.min(self.simulation.orders().cap());
        self
    }

    /// Initial paint: quotes, news, first headline, chart, then the seed
    /// orders. Timers are not involved.
    pub fn open(&mut self, now: Timestamp, initial_orders: usize) {
        self.refresh_quotes();
        self.render_news();
        self.rotate_headline();
        self.draw_chart();
        self.simulation.seed_orders(initial_orders, now);
        self.render_blotter();
        log::info!(
            "Dashboard opened: {} tickers, {} seed orders",
            self.simulation.market().len(),
            initial_orders
        );
    }

    /// Step prices and the series, then redraw the chart
    pub fn frame(&mut self) {
        self.simulation.step_frame();
        self.draw_chart();
    }

    pub fn draw_chart(&mut self) {
        self.chart.render(self.simulation.series(), &mut self.surface);
    }

    /// Sample the watchlist and ticker strip and push both views
    pub fn refresh_quotes(&mut self) -> QuoteBoard {
        let board = self.simulation.sample_quotes();
        self.surface.render_rows(&watchlist_rows(&board));
        self.surface.render_rows(&ticker_strip_rows(&board));
        board
    }

    /// Advance the banner; nothing is drawn when there are no stories
    pub fn rotate_headline(&mut self) -> Option<Story> {
        let story = self.simulation.rotate_headline().cloned()?;
        self.surface.render_rows(&headline_rows(&story));
        Some(story)
    }

    pub fn emit_order(&mut self, now: Timestamp) -> Order {
        let order = self.simulation.emit_order(now);
        self.render_blotter();
        order
    }

    pub fn render_news(&mut self) {
        self.surface.render_rows(&news_rows(self.simulation.stories()));
    }

    fn render_blotter(&mut self) {
        self.surface
            .render_rows(&blotter_rows(self.simulation.orders(), self.blotter_limit));
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.simulation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_parts(self) -> (Simulation<R>, S) {
        (self.simulation, self.surface)
    }
}

/// Register the frame loop and the three periodic behaviors
pub fn schedule<R, S>(config: &DashboardConfig, clock: Arc<dyn Clock>) -> Scheduler<Dashboard<R, S>>
where
    R: RandomSource + 'static,
    S: DashboardSurface + 'static,
{
    let mut scheduler: Scheduler<Dashboard<R, S>> = Scheduler::new(clock);
    scheduler
        .on_frame(config.frame_interval(), |dashboard, _| dashboard.frame())
        .every(WATCHLIST_TASK, config.watchlist_interval(), |dashboard, _| {
            dashboard.refresh_quotes();
        })
        .every(HEADLINE_TASK, config.headline_interval(), |dashboard, _| {
            dashboard.rotate_headline();
        })
        .every(ORDERS_TASK, config.order_interval(), |dashboard, at| {
            dashboard.emit_order(at);
        });
    scheduler
}
