//! Energy clock: a resource that drains linearly and costs a life at zero.
//!
//! Elapsed time is accumulated from logical milliseconds handed over by the
//! session scheduler. While the run is paused nothing is handed over, so on
//! resume the remaining energy continues exactly where it stopped.

use crate::core::constants::{ENERGY_FULL, ENERGY_LOW_ALERT_PERCENT, ENERGY_LOW_VISUAL_PERCENT};

/// Threshold crossings reported by [`EnergyClock::sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergySignal {
    /// Energy fell to the alert threshold. Reported once per decay cycle.
    LowAlert,
    /// Energy reached zero. The clock stops until restarted.
    Exhausted,
}

/// Energy remaining after `elapsed_ms` of a `duration_ms` decay cycle.
pub fn energy_at(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    (ENERGY_FULL - ENERGY_FULL * (elapsed_ms as f64 / duration_ms as f64)).max(0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyClock {
    duration_ms: u64,
    elapsed_ms: u64,
    /// Value at the last sample; this is what the HUD shows.
    level: f64,
    running: bool,
    alert_sent: bool,
}

impl EnergyClock {
    /// A stopped, full clock.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
            level: ENERGY_FULL,
            running: false,
            alert_sent: false,
        }
    }

    /// Refill to 100 and start a new decay cycle.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
        self.level = ENERGY_FULL;
        self.running = true;
        self.alert_sent = false;
    }

    /// Stop draining. Stopping a stopped clock is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn advance(&mut self, ms: u64) {
        if self.running {
            self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        }
    }

    /// Recompute the level and report a threshold crossing, if any.
    pub fn sample(&mut self) -> Option<EnergySignal> {
        if !self.running {
            return None;
        }

        self.level = energy_at(self.elapsed_ms, self.duration_ms);

        if self.level <= 0.0 {
            self.running = false;
            return Some(EnergySignal::Exhausted);
        }
        if self.level > ENERGY_LOW_ALERT_PERCENT {
            self.alert_sent = false;
            return None;
        }
        if !self.alert_sent {
            self.alert_sent = true;
            return Some(EnergySignal::LowAlert);
        }
        None
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// At or below the visual warning threshold.
    pub fn is_low(&self) -> bool {
        self.level <= ENERGY_LOW_VISUAL_PERCENT
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Logical time left before the clock hits zero.
    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms.saturating_sub(self.elapsed_ms)
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}
