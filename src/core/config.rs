//! Run configuration assembled from the build-time constants.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// How the tick interval evolves while a run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedPolicy {
    /// Every food eaten shortens the interval by `step_ms`, never below `floor_ms`.
    Accelerating { step_ms: u64, floor_ms: u64 },
    /// The level's initial interval holds for the whole run.
    Constant,
}

impl Default for SpeedPolicy {
    fn default() -> Self {
        SpeedPolicy::Accelerating {
            step_ms: SPEED_STEP_MS,
            floor_ms: SPEED_FLOOR_MS,
        }
    }
}

impl SpeedPolicy {
    /// Interval to use after one food is eaten at `current_ms`.
    pub fn next_interval(&self, current_ms: u64) -> u64 {
        match *self {
            SpeedPolicy::Accelerating { step_ms, floor_ms } => {
                // A zero floor would make the speed multiplier divide by zero.
                let floor_ms = floor_ms.max(1);
                current_ms.saturating_sub(step_ms).max(floor_ms)
            }
            SpeedPolicy::Constant => current_ms,
        }
    }
}

/// Tunables for one game session.
///
/// `Default` reproduces the shipped game; tests shrink grids and durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_cell_count: i16,
    pub cell_size_px: u32,
    pub speed_policy: SpeedPolicy,
    pub food_timeout_ms: u64,
    pub energy_duration_ms: u64,
    pub energy_poll_ms: u64,
    pub initial_lives: u32,
    pub max_records: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_cell_count: GRID_CELL_COUNT,
            cell_size_px: CELL_SIZE_PX,
            speed_policy: SpeedPolicy::default(),
            food_timeout_ms: FOOD_TIMEOUT_MS,
            energy_duration_ms: ENERGY_DURATION_MS,
            energy_poll_ms: ENERGY_POLL_MS,
            initial_lives: INITIAL_LIVES,
            max_records: MAX_RECORDS,
        }
    }
}

impl GameConfig {
    /// Same configuration with the constant-speed rule set.
    pub fn with_constant_speed(mut self) -> Self {
        self.speed_policy = SpeedPolicy::Constant;
        self
    }
}
