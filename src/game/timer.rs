//! Logical-time interval timers driven by the session scheduler.

/// A repeating timer measured in logical milliseconds.
///
/// The timer never reads a wall clock: the scheduler feeds it elapsed time
/// with [`IntervalTimer::elapse`], so pausing is just not feeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    interval_ms: u64,
    elapsed_ms: u64,
    armed: bool,
}

impl IntervalTimer {
    /// A disarmed timer. Intervals are at least 1ms.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: false,
        }
    }

    /// Start a fresh period. Re-arming an armed timer restarts its period.
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed_ms = 0;
    }

    /// Tear down with a new interval and start a fresh period.
    pub fn rearm_with(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
        self.arm();
    }

    /// Disarm. Cancelling a disarmed timer is a no-op.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Milliseconds until the next firing, `None` while disarmed.
    pub fn until_due(&self) -> Option<u64> {
        self.armed
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }

    pub fn elapse(&mut self, ms: u64) {
        if self.armed {
            self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        }
    }

    /// Consume one firing if the timer is due.
    pub fn take_due(&mut self) -> bool {
        if self.armed && self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            true
        } else {
            false
        }
    }
}
