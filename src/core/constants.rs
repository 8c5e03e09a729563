//! Build-time game constants.

// Board geometry
pub const BOARD_SIZE_PX: u32 = 600;
pub const CELL_SIZE_PX: u32 = 20;
pub const GRID_CELL_COUNT: i16 = (BOARD_SIZE_PX / CELL_SIZE_PX) as i16;

// Snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// Tick intervals per level (milliseconds, lower = faster)
pub const EASY_INTERVAL_MS: u64 = 200;
pub const MEDIUM_INTERVAL_MS: u64 = 100;
pub const HARD_INTERVAL_MS: u64 = 60;

// Points per food per level
pub const EASY_POINTS: u32 = 1;
pub const MEDIUM_POINTS: u32 = 2;
pub const HARD_POINTS: u32 = 3;

// Speed scaling
pub const SPEED_STEP_MS: u64 = 10;
pub const SPEED_FLOOR_MS: u64 = 50;

// Food
pub const FOOD_TIMEOUT_MS: u64 = 9_000;

// Energy
pub const ENERGY_FULL: f64 = 100.0;
pub const ENERGY_DURATION_MS: u64 = 9_000;
pub const ENERGY_POLL_MS: u64 = 100;
pub const ENERGY_LOW_VISUAL_PERCENT: f64 = 20.0;
pub const ENERGY_LOW_ALERT_PERCENT: f64 = 10.0;

// Lives
pub const INITIAL_LIVES: u32 = 3;

// Scheduler: largest frame delta applied in one update, so a stalled
// frontend does not fast-forward the run.
pub const MAX_FRAME_MS: u64 = 500;

// Leaderboard
pub const MAX_RECORDS: usize = 10;
pub const RECORDS_FILE: &str = "snake-game-records.json";
pub const DEFAULT_PLAYER_NAME: &str = "Player";

// Frontend
pub const LOG_FILE: &str = "serpent.log";
pub const FRAME_POLL_MS: u64 = 16;
