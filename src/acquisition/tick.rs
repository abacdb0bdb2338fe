//! Tick sources that pace the acquisition loop.

use std::time::{Duration, Instant};

/// Decides when the acquisition loop should run its next tick.
///
/// The caller polls from a single thread and runs at most one tick per
/// successful poll, so ticks never overlap.
pub trait TickSource {
    /// Returns `true` if a tick is due at `now`, consuming it.
    fn poll(&mut self, now: Instant) -> bool;

    /// When the next tick becomes due, if known.
    fn next_deadline(&self) -> Option<Instant>;
}

/// Fixed-interval timer. The first poll always fires.
///
/// Deadlines missed while a slow tick was running are not replayed; the next
/// deadline is scheduled from the moment the tick fired.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    next: Option<Instant>,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl TickSource for IntervalTicker {
    fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now < deadline => false,
            _ => {
                self.next = Some(now + self.interval);
                true
            }
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.next
    }
}

/// Ticks only when stepped explicitly; used for tests and headless stepping.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    pending: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one tick.
    pub fn step(&mut self) {
        self.pending += 1;
    }

    pub fn pending(&self) -> usize {
        self.pending
    }
}

impl TickSource for ManualTicker {
    fn poll(&mut self, _now: Instant) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    fn next_deadline(&self) -> Option<Instant> {
        None
    }
}
