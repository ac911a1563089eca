//! Host - assembles a dashboard from config and drives it on tokio
//!
//! The host ticks at the frame interval and lets the scheduler decide what
//! is due. A `watch` channel carries the shutdown signal; when it flips the
//! scheduler is stopped and the dashboard handed back.

use sambucks_core::Timestamp;
use sambucks_ports::{Clock, DashboardSurface, RandomSource};
use sambucks_render::ChartRenderer;
use sambucks_sim::{SeededRandom, Simulation};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::bootstrap::{FeedDocument, MarketSeed, build_payload};
use crate::config::DashboardConfig;
use crate::dashboard::{Dashboard, schedule};
use crate::error::RunnerError;
use crate::scheduler::Scheduler;

/// A dashboard, its scheduler, and the host tick
pub struct DashboardHost<R: RandomSource, S: DashboardSurface> {
    dashboard: Dashboard<R, S>,
    scheduler: Scheduler<Dashboard<R, S>>,
    tick: Duration,
}

impl<S: DashboardSurface + 'static> DashboardHost<SeededRandom, S> {
    /// Seed, build, and paint a dashboard. The scheduler is left stopped.
    pub fn assemble(
        config: &DashboardConfig,
        feed: FeedDocument,
        surface: S,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, RunnerError> {
        config.validate()?;

        let market = MarketSeed::generate(config.market_seed, config.ticker_count);
        let payload = build_payload(market, feed)?;
        let rng = match config.simulation_seed {
            Some(seed) => SeededRandom::with_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        let simulation = Simulation::new(payload, config.simulation, rng)?;

        let mut dashboard =
            Dashboard::new(simulation, surface, ChartRenderer::new(config.chart_layout()));
        dashboard.open(clock.now(), config.initial_orders);

        let scheduler = schedule(config, clock);
        let tick = Duration::from_millis(config.frame_interval_ms.max(1));
        Ok(Self::new(dashboard, scheduler, tick))
    }
}

impl<R: RandomSource, S: DashboardSurface> DashboardHost<R, S> {
    pub fn new(
        dashboard: Dashboard<R, S>,
        scheduler: Scheduler<Dashboard<R, S>>,
        tick: Duration,
    ) -> Self {
        Self {
            dashboard,
            scheduler,
            tick,
        }
    }

    pub fn dashboard(&self) -> &Dashboard<R, S> {
        &self.dashboard
    }

    pub fn scheduler(&self) -> &Scheduler<Dashboard<R, S>> {
        &self.scheduler
    }

    /// Add tasks (e.g. a printer) before running
    pub fn scheduler_mut(&mut self) -> &mut Scheduler<Dashboard<R, S>> {
        &mut self.scheduler
    }

    /// Run whatever is due now, without the tokio loop
    pub fn poll(&mut self) -> usize {
        self.scheduler.poll(&mut self.dashboard)
    }

    pub fn now(&self) -> Timestamp {
        self.scheduler.clock().now()
    }

    /// Run until `shutdown` reads `true` or its sender is dropped
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Self {
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.scheduler.start();
        log::info!("Dashboard running ({}ms tick)", self.tick.as_millis());

        while !*shutdown.borrow() {
            tokio::select! {
                _ = ticker.tick() => {
                    self.scheduler.poll(&mut self.dashboard);
                }
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        log::warn!("Shutdown sender dropped");
                        break;
                    }
                }
            }
        }

        self.scheduler.stop();
        log::info!(
            "Dashboard stopped after {} frames, {} orders",
            self.dashboard.simulation().frames(),
            self.dashboard.simulation().orders().len()
        );
        self
    }

    pub fn into_dashboard(self) -> Dashboard<R, S> {
        self.dashboard
    }
}
