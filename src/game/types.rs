//! Snake data types: cells, directions, levels and run states.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// A cell on the square grid, in cell units.
///
/// Coordinates are signed so a head that just left the board can still be
/// represented long enough to be reported as a wall collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Screen y grows downward.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn is_reverse_of(&self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Difficulty preset, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Level::Easy)
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase identifier, as stored in records and accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Initial tick interval in milliseconds (lower = faster).
    pub fn initial_interval_ms(&self) -> u64 {
        match self {
            Self::Easy => EASY_INTERVAL_MS,
            Self::Medium => MEDIUM_INTERVAL_MS,
            Self::Hard => HARD_INTERVAL_MS,
        }
    }

    /// Score awarded per food eaten.
    pub fn points_per_food(&self) -> u32 {
        match self {
            Self::Easy => EASY_POINTS,
            Self::Medium => MEDIUM_POINTS,
            Self::Hard => HARD_POINTS,
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown level '{}' (expected easy, medium or hard)", s))
    }
}

/// Top-level run state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameRunState {
    /// Menu / idle, no run in progress.
    #[default]
    Stopped,
    Playing,
    Paused,
    GameOver,
}
