//! Mount-Scoped Ticker
//!
//! Counts interval firings for a mounted view. The interval is acquired in
//! `mount` and released by `unmount` or on drop, whichever comes first.

use std::time::Duration;

use crate::platform::{IntervalScheduler, TimerGuard};

pub struct Ticker<H> {
    timer: TimerGuard<H>,
}

impl<H> Ticker<H> {
    /// Start ticking; `on_tick` receives the running count (1, 2, ...)
    pub fn mount<S>(scheduler: &S, period: Duration, mut on_tick: impl FnMut(u64) + 'static) -> Self
    where
        S: IntervalScheduler<Handle = H>,
    {
        let mut ticks = 0u64;
        let timer = TimerGuard::start(scheduler, period, move || {
            ticks += 1;
            on_tick(ticks);
        });
        log::info!("[ticker] mounted, timer started ({:?})", period);
        Self { timer }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.is_active()
    }

    /// Release the interval. Later calls do nothing.
    pub fn unmount(&mut self) {
        if self.timer.cancel() {
            log::info!("[ticker] unmounted, timer cleared");
        }
    }
}

/// Label for the button that shows or hides the ticking child
pub fn visibility_label(visible: bool) -> &'static str {
    if visible {
        "Hide Timer"
    } else {
        "Show Timer"
    }
}
