//! Repeating Timers
//!
//! A scheduled interval lives exactly as long as its handle. `TimerGuard`
//! wraps the handle so release happens once, either explicitly or on drop.

use std::time::Duration;

use gloo_timers::callback::Interval;

/// Source of repeating callbacks
pub trait IntervalScheduler {
    /// Dropping the handle cancels the interval
    type Handle;

    fn schedule(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser `setInterval` via gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl IntervalScheduler for BrowserScheduler {
    type Handle = Interval;

    fn schedule(&self, period: Duration, on_tick: Box<dyn FnMut()>) -> Interval {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        Interval::new(millis, on_tick)
    }
}

/// Owns a running interval until cancelled or dropped
pub struct TimerGuard<H> {
    handle: Option<H>,
}

impl<H> TimerGuard<H> {
    pub fn start<S>(scheduler: &S, period: Duration, on_tick: impl FnMut() + 'static) -> Self
    where
        S: IntervalScheduler<Handle = H>,
    {
        Self {
            handle: Some(scheduler.schedule(period, Box::new(on_tick))),
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Stop the interval. Returns `false` if it was already stopped.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }
}

impl<H> Drop for TimerGuard<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Scheduler driven by the test instead of the clock.

    use super::IntervalScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    struct Entry {
        live: Rc<Cell<bool>>,
        on_tick: Box<dyn FnMut()>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        entries: Rc<RefCell<Vec<Entry>>>,
    }

    pub struct ManualHandle {
        live: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.live.set(false);
        }
    }

    impl ManualScheduler {
        /// Fire every live interval `periods` times
        pub fn advance(&self, periods: usize) {
            for _ in 0..periods {
                for entry in self.entries.borrow_mut().iter_mut() {
                    if entry.live.get() {
                        (entry.on_tick)();
                    }
                }
            }
        }

        pub fn live_count(&self) -> usize {
            self.entries.borrow().iter().filter(|e| e.live.get()).count()
        }
    }

    impl IntervalScheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, _period: Duration, on_tick: Box<dyn FnMut()>) -> ManualHandle {
            let live = Rc::new(Cell::new(true));
            self.entries.borrow_mut().push(Entry {
                live: live.clone(),
                on_tick,
            });
            ManualHandle { live }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_guard_fires_until_cancelled() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let mut guard = TimerGuard::start(&scheduler, Duration::from_secs(1), move || {
            counter.set(counter.get() + 1)
        });

        scheduler.advance(3);
        assert_eq!(fired.get(), 3);

        assert!(guard.cancel());
        assert!(!guard.is_active());
        scheduler.advance(2);
        assert_eq!(fired.get(), 3);
    }

    #[test]
    fn test_cancel_twice_is_noop() {
        let scheduler = ManualScheduler::default();
        let mut guard = TimerGuard::start(&scheduler, Duration::from_secs(1), || {});
        assert!(guard.cancel());
        assert!(!guard.cancel());
        drop(guard);
        assert_eq!(scheduler.live_count(), 0);
    }

    #[test]
    fn test_drop_releases_interval() {
        let scheduler = ManualScheduler::default();
        let guard = TimerGuard::start(&scheduler, Duration::from_secs(1), || {});
        assert_eq!(scheduler.live_count(), 1);
        drop(guard);
        assert_eq!(scheduler.live_count(), 0);
    }
}
