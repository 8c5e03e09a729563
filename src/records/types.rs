//! Leaderboard records.

use crate::game::types::Level;
use serde::{Deserialize, Serialize};

/// One finished run on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub score: u32,
    pub level: Level,
    /// Speed multiplier reached, one decimal.
    pub speed_multiplier: f64,
    /// Unix timestamp (seconds) of the game over.
    pub timestamp: i64,
}

/// Bounded leaderboard, highest score first.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    entries: Vec<Record>,
    capacity: usize,
}

impl Leaderboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from stored records, restoring order and size if the file was
    /// edited by hand.
    pub fn from_records(mut records: Vec<Record>, capacity: usize) -> Self {
        records.sort_by(|a, b| b.score.cmp(&a.score));
        records.truncate(capacity);
        Self {
            entries: records,
            capacity,
        }
    }

    /// A score makes the board if the board has room or it beats the lowest entry.
    pub fn qualifies(&self, score: u32) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.entries.len() < self.capacity {
            return true;
        }
        self.lowest_score().map_or(true, |lowest| score > lowest)
    }

    /// Insert a qualifying record. Returns its 1-based rank, or `None` if it
    /// did not qualify. Ties keep earlier records ahead.
    pub fn insert(&mut self, record: Record) -> Option<usize> {
        if !self.qualifies(record.score) {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .filter(|r| r.score >= record.score)
            .count()
            + 1;
        self.entries.push(record);
        // Stable sort: equal scores stay in insertion order.
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
        Some(rank)
    }

    pub fn entries(&self) -> &[Record] {
        &self.entries
    }

    pub fn lowest_score(&self) -> Option<u32> {
        self.entries.last().map(|r| r.score)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
