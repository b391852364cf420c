use std::time::{Duration, Instant};

/// Fixed-period wall-clock timer.
///
/// `poll` is called once per frame with the frame timestamp. It fires at most
/// once per call, after which the period restarts from that timestamp. A long
/// stall therefore produces a single tick, not a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last: Instant,
    ticks: u64,
}

impl Ticker {
    pub fn starting_at(period: Duration, start: Instant) -> Self {
        debug_assert!(!period.is_zero(), "ticker period must be non-zero");
        Self {
            period,
            last: start,
            ticks: 0,
        }
    }

    /// Number of times the ticker has fired.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `true` if at least one period elapsed since the last tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.period {
            return false;
        }
        self.last = now;
        self.ticks = self.ticks.wrapping_add(1);
        true
    }
}
