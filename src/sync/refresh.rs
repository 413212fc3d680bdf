//! Refresh Scheduler
//!
//! Re-runs the summary sync on a fixed cadence for the lifetime of the page.
//! Two states: inactive until the dashboard wires it up, then active until
//! the page itself is torn down. There is no reverse transition.

use crate::timer::Schedule;

/// Cadence of the recurring summary refresh.
pub const SUMMARY_REFRESH_MS: u32 = 30_000;

pub struct RefreshScheduler<S: Schedule> {
    schedule: S,
    ticker: Option<S::Handle>,
}

impl<S: Schedule> RefreshScheduler<S> {
    pub fn new(schedule: S) -> Self {
        Self {
            schedule,
            ticker: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    /// Activate the scheduler: fire `on_tick` immediately, then every
    /// [`SUMMARY_REFRESH_MS`], unconditionally. Ticks are not chained on the
    /// previous refresh completing; `on_tick` must only kick off work.
    ///
    /// Returns `true` when this call performed the inactive-to-active
    /// transition, `false` when the scheduler was already running.
    pub fn start<F: FnMut() + 'static>(&mut self, mut on_tick: F) -> bool {
        if self.is_active() {
            return false;
        }
        on_tick();
        self.ticker = Some(self.schedule.every(SUMMARY_REFRESH_MS, Box::new(on_tick)));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::testing::VirtualSchedule;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_scheduler() -> (RefreshScheduler<VirtualSchedule>, VirtualSchedule, Rc<Cell<u32>>) {
        let schedule = VirtualSchedule::new();
        let scheduler = RefreshScheduler::new(schedule.clone());
        (scheduler, schedule, Rc::new(Cell::new(0)))
    }

    #[test]
    fn test_start_fires_immediately_then_every_interval() {
        let (mut scheduler, schedule, ticks) = counting_scheduler();
        let ticks_clone = Rc::clone(&ticks);

        let activated = scheduler.start(move || ticks_clone.set(ticks_clone.get() + 1));
        assert!(activated);
        assert!(scheduler.is_active());
        assert_eq!(ticks.get(), 1);

        schedule.advance(u64::from(SUMMARY_REFRESH_MS) - 1);
        assert_eq!(ticks.get(), 1);
        schedule.advance(1);
        assert_eq!(ticks.get(), 2);
        schedule.advance(u64::from(SUMMARY_REFRESH_MS) * 3);
        assert_eq!(ticks.get(), 5);
    }

    #[test]
    fn test_ticks_fire_regardless_of_prior_completion() {
        // A hung fetch never resolves; the tick callback only starts work,
        // so the cadence must continue undisturbed.
        let (mut scheduler, schedule, ticks) = counting_scheduler();
        let ticks_clone = Rc::clone(&ticks);
        let in_flight = Rc::new(Cell::new(0u32));
        let in_flight_clone = Rc::clone(&in_flight);

        scheduler.start(move || {
            ticks_clone.set(ticks_clone.get() + 1);
            // Simulate kicking off a request that never completes.
            in_flight_clone.set(in_flight_clone.get() + 1);
        });

        schedule.advance(u64::from(SUMMARY_REFRESH_MS) * 4);
        assert_eq!(ticks.get(), 5);
        assert_eq!(in_flight.get(), 5);
    }

    #[test]
    fn test_second_start_is_a_no_op() {
        let (mut scheduler, schedule, ticks) = counting_scheduler();
        let first = Rc::clone(&ticks);
        assert!(scheduler.start(move || first.set(first.get() + 1)));

        let second = Rc::clone(&ticks);
        assert!(!scheduler.start(move || second.set(second.get() + 100)));

        schedule.advance(u64::from(SUMMARY_REFRESH_MS));
        // Only the first callback ever runs: once immediately, once on tick.
        assert_eq!(ticks.get(), 2);
    }
}
