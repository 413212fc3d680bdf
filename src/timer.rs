//! Schedulable Tasks
//!
//! A thin seam over browser timers so time-driven behavior can be tested
//! with a virtual clock instead of wall-clock waits. Production code runs on
//! `BrowserSchedule`, which wraps `gloo_timers`.

use gloo_timers::callback::{Interval, Timeout};

/// Handle to a scheduled task.
pub trait TimerHandle {
    /// Cancel the task. Already-fired one-shot tasks are unaffected.
    fn cancel(self);
}

/// Source of cancellable timers.
pub trait Schedule {
    type Handle: TimerHandle;

    /// Run `callback` once after `delay_ms`.
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `callback` every `period_ms`, starting one period from now.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Timers backed by the browser event loop.
pub struct BrowserSchedule;

/// A live browser timer. Dropping it clears the underlying timer.
pub enum BrowserTimer {
    Once(Timeout),
    Every(Interval),
}

impl BrowserTimer {
    /// Let the timer run for the remaining page lifetime without a handle.
    pub fn forget(self) {
        match self {
            BrowserTimer::Once(timeout) => {
                timeout.forget();
            }
            BrowserTimer::Every(interval) => {
                interval.forget();
            }
        }
    }
}

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        match self {
            BrowserTimer::Once(timeout) => {
                let _ = timeout.cancel();
            }
            BrowserTimer::Every(interval) => {
                let _ = interval.cancel();
            }
        }
    }
}

impl Schedule for BrowserSchedule {
    type Handle = BrowserTimer;

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Once(Timeout::new(delay_ms, callback))
    }

    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Every(Interval::new(period_ms, move || callback()))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::VirtualSchedule;
    use super::{Schedule, TimerHandle};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_once_fires_at_due_time() {
        let schedule = VirtualSchedule::new();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = Rc::clone(&fired);
        let handle = schedule.once(5000, Box::new(move || fired_clone.set(true)));

        schedule.advance(4999);
        assert!(!fired.get());
        schedule.advance(1);
        assert!(fired.get());
        assert_eq!(schedule.now(), 5000);
        handle.cancel();
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let schedule = VirtualSchedule::new();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = Rc::clone(&fired);
        let handle = schedule.once(5000, Box::new(move || fired_clone.set(true)));

        handle.cancel();
        schedule.advance(10_000);
        assert!(!fired.get());
    }

    #[test]
    fn test_every_fires_each_period() {
        let schedule = VirtualSchedule::new();
        let count = Rc::new(Cell::new(0u32));
        let count_clone = Rc::clone(&count);
        let handle = schedule.every(30_000, Box::new(move || count_clone.set(count_clone.get() + 1)));

        schedule.advance(29_999);
        assert_eq!(count.get(), 0);
        schedule.advance(1);
        assert_eq!(count.get(), 1);
        schedule.advance(90_000);
        assert_eq!(count.get(), 4);

        handle.cancel();
        schedule.advance(60_000);
        assert_eq!(count.get(), 4);
    }
}
