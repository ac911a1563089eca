//! Scheduler - frame loop plus named periodic tasks over one clock
//!
//! Tasks receive `&mut C` (the context the host owns) and the time they
//! fire at. Nothing runs concurrently: [`Scheduler::poll`] runs every task
//! that is due, one after another, on the caller's thread.
//!
//! - The frame task runs at most once per poll. It is rescheduled one
//!   interval after its due time, or after "now" when that is already past,
//!   so a stalled host skips frames instead of replaying them.
//! - Interval tasks catch up: if virtual time jumps by three periods the
//!   task fires three times, each with its own due time, in due-time order
//!   across tasks.

use chrono::Duration;
use sambucks_core::Timestamp;
use sambucks_ports::Clock;
use std::sync::Arc;

/// Task body
pub type TaskFn<C> = Box<dyn FnMut(&mut C, Timestamp) + Send>;

/// Name reported for the frame task
pub const FRAME_TASK: &str = "frame";

struct Task<C> {
    name: String,
    period: Duration,
    next_due: Option<Timestamp>,
    runs: u64,
    callback: TaskFn<C>,
}

impl<C> Task<C> {
    fn new(name: String, period: Duration, callback: TaskFn<C>) -> Self {
        // Zero or negative periods would never let time move past the task
        let period = period.max(Duration::milliseconds(1));
        Self {
            name,
            period,
            next_due: None,
            runs: 0,
            callback,
        }
    }

    fn is_due(&self, now: Timestamp) -> bool {
        self.next_due.is_some_and(|due| due <= now)
    }

    /// Arm one period after `from`. A deadline past the end of time disarms.
    fn arm_after(&mut self, from: Timestamp) {
        self.next_due = from.checked_add_signed(self.period);
        if self.next_due.is_none() {
            log::warn!("Task '{}' period {} is out of range, disarmed", self.name, self.period);
        }
    }
}

/// Drives a context `C` from a frame task and any number of interval tasks
pub struct Scheduler<C> {
    clock: Arc<dyn Clock>,
    frame: Option<Task<C>>,
    intervals: Vec<Task<C>>,
    running: bool,
}

impl<C> Scheduler<C> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            frame: None,
            intervals: Vec::new(),
            running: false,
        }
    }

    /// Set the frame-paced task, replacing any previous one
    pub fn on_frame<F>(&mut self, interval: Duration, callback: F) -> &mut Self
    where
        F: FnMut(&mut C, Timestamp) + Send + 'static,
    {
        let mut task = Task::new(FRAME_TASK.to_string(), interval, Box::new(callback));
        if self.running {
            task.arm_after(self.clock.now());
        }
        self.frame = Some(task);
        self
    }

    /// Add a named task that fires every `period`
    pub fn every<F>(&mut self, name: impl Into<String>, period: Duration, callback: F) -> &mut Self
    where
        F: FnMut(&mut C, Timestamp) + Send + 'static,
    {
        let mut task = Task::new(name.into(), period, Box::new(callback));
        if self.running {
            task.arm_after(self.clock.now());
        }
        self.intervals.push(task);
        self
    }

    /// Arm every task: each first fires one period from now
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        let now = self.clock.now();
        for task in self.frame.iter_mut().chain(self.intervals.iter_mut()) {
            task.arm_after(now);
        }
        self.running = true;
        log::info!(
            "Scheduler started on {} with {} interval tasks",
            self.clock.name(),
            self.intervals.len()
        );
    }

    /// Disarm every task; nothing fires until the next `start`
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        for task in self.frame.iter_mut().chain(self.intervals.iter_mut()) {
            task.next_due = None;
        }
        self.running = false;
        log::info!("Scheduler stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run everything that is due by the clock's current time.
    /// Returns the number of task invocations.
    pub fn poll(&mut self, ctx: &mut C) -> usize {
        if !self.running {
            return 0;
        }
        let now = self.clock.now();
        let mut fired = 0;

        if let Some(frame) = self.frame.as_mut().filter(|f| f.is_due(now)) {
            (frame.callback)(ctx, now);
            frame.runs += 1;
            // Keep the cadence under tick jitter; after a stall, restart from now
            match frame.next_due.and_then(|due| due.checked_add_signed(frame.period)) {
                Some(next) if next > now => frame.next_due = Some(next),
                _ => frame.arm_after(now),
            }
            fired += 1;
        }

        // Earliest due first; ties keep registration order
        while let Some(index) = self
            .intervals
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_due(now))
            .min_by_key(|(i, t)| (t.next_due, *i))
            .map(|(i, _)| i)
        {
            let task = &mut self.intervals[index];
            let Some(due) = task.next_due else {
                break;
            };
            log::debug!("Task '{}' fired for {}", task.name, due);
            (task.callback)(ctx, due);
            task.runs += 1;
            task.arm_after(due);
            fired += 1;
        }

        fired
    }

    /// Earliest pending fire time
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.frame
            .iter()
            .chain(self.intervals.iter())
            .filter_map(|t| t.next_due)
            .min()
    }

    /// How often a task has run, by name
    pub fn runs(&self, name: &str) -> Option<u64> {
        self.frame
            .iter()
            .chain(self.intervals.iter())
            .find(|t| t.name == name)
            .map(|t| t.runs)
    }

    /// Names of all registered tasks, frame task first
    pub fn task_names(&self) -> Vec<&str> {
        self.frame
            .iter()
            .chain(self.intervals.iter())
            .map(|t| t.name.as_str())
            .collect()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sambucks_clock::WorldClock;

    fn clock() -> Arc<WorldClock> {
        WorldClock::fixed(Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap())
    }

    #[derive(Default)]
    struct Log {
        events: Vec<(&'static str, Timestamp)>,
    }

    #[test]
    fn test_nothing_fires_before_start_or_after_stop() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.every("tick", Duration::seconds(1), |log, at| {
            log.events.push(("tick", at))
        });
        let mut log = Log::default();

        clock.advance(Duration::seconds(5));
        assert_eq!(scheduler.poll(&mut log), 0);

        scheduler.start();
        clock.advance(Duration::seconds(1));
        assert_eq!(scheduler.poll(&mut log), 1);

        scheduler.stop();
        clock.advance(Duration::seconds(10));
        assert_eq!(scheduler.poll(&mut log), 0);
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.next_deadline(), None);
        assert_eq!(log.events.len(), 1);
    }

    #[test]
    fn test_interval_catches_up_with_due_times() {
        let clock = clock();
        let start = clock.now();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.every("orders", Duration::milliseconds(1200), |log, at| {
            log.events.push(("orders", at))
        });
        let mut log = Log::default();
        scheduler.start();

        clock.advance(Duration::milliseconds(3700));
        assert_eq!(scheduler.poll(&mut log), 3);

        let times: Vec<i64> = log
            .events
            .iter()
            .map(|(_, at)| (*at - start).num_milliseconds())
            .collect();
        assert_eq!(times, vec![1200, 2400, 3600]);
        assert_eq!(scheduler.runs("orders"), Some(3));
        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::milliseconds(4800))
        );
    }

    #[test]
    fn test_tasks_interleave_in_due_order() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler
            .every("slow", Duration::seconds(5), |log, at| log.events.push(("slow", at)))
            .every("fast", Duration::seconds(2), |log, at| log.events.push(("fast", at)));
        let mut log = Log::default();
        scheduler.start();

        clock.advance(Duration::seconds(6));
        scheduler.poll(&mut log);

        let names: Vec<&str> = log.events.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["fast", "fast", "slow", "fast"]);
    }

    #[test]
    fn test_frame_runs_once_per_poll() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.on_frame(Duration::milliseconds(16), |log, at| {
            log.events.push((FRAME_TASK, at))
        });
        let mut log = Log::default();
        scheduler.start();

        clock.advance(Duration::milliseconds(10));
        assert_eq!(scheduler.poll(&mut log), 0);

        clock.advance(Duration::milliseconds(1000));
        assert_eq!(scheduler.poll(&mut log), 1);
        assert_eq!(scheduler.poll(&mut log), 0);

        clock.advance(Duration::milliseconds(16));
        assert_eq!(scheduler.poll(&mut log), 1);
        assert_eq!(scheduler.runs(FRAME_TASK), Some(2));
    }

    #[test]
    fn test_frame_keeps_cadence_under_jitter() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.on_frame(Duration::milliseconds(16), |log, at| {
            log.events.push((FRAME_TASK, at))
        });
        let mut log = Log::default();
        scheduler.start();

        for tick in 0..100 {
            let step = if tick % 2 == 0 { 17 } else { 15 };
            clock.advance(Duration::milliseconds(step));
            scheduler.poll(&mut log);
        }

        assert_eq!(scheduler.runs(FRAME_TASK), Some(100));
    }

    #[test]
    fn test_stalled_frame_restarts_from_now() {
        let clock = clock();
        let start = clock.now();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.on_frame(Duration::milliseconds(16), |log, at| {
            log.events.push((FRAME_TASK, at))
        });
        let mut log = Log::default();
        scheduler.start();

        clock.advance(Duration::milliseconds(500));
        scheduler.poll(&mut log);

        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::milliseconds(516))
        );
    }

    #[test]
    fn test_unreachable_deadline_disarms_instead_of_panicking() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler
            .every("never", Duration::MAX, |log, at| log.events.push(("never", at)))
            .every("tick", Duration::seconds(1), |log, at| log.events.push(("tick", at)));
        let mut log = Log::default();

        scheduler.start();
        clock.advance(Duration::seconds(3));

        assert_eq!(scheduler.poll(&mut log), 3);
        assert_eq!(scheduler.runs("never"), Some(0));
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_restart_rearms_from_now() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.every("tick", Duration::seconds(1), |log, at| {
            log.events.push(("tick", at))
        });
        let mut log = Log::default();

        scheduler.start();
        scheduler.stop();
        clock.advance(Duration::seconds(30));
        scheduler.start();

        assert_eq!(scheduler.poll(&mut log), 0);
        clock.advance(Duration::seconds(1));
        assert_eq!(scheduler.poll(&mut log), 1);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let clock = clock();
        let mut scheduler: Scheduler<Log> = Scheduler::new(clock.clone());
        scheduler.every("busy", Duration::zero(), |log, at| {
            log.events.push(("busy", at))
        });
        let mut log = Log::default();
        scheduler.start();

        clock.advance(Duration::milliseconds(5));
        assert_eq!(scheduler.poll(&mut log), 5);
        assert_eq!(scheduler.task_names(), vec!["busy"]);
    }
}
