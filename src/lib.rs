//! Serpent - snake game simulation library.
//!
//! Exposes the simulation core, the leaderboard and the collaborator seams
//! for testing and for frontends other than the bundled terminal binary.

pub mod core;
pub mod game;
pub mod host;
pub mod records;
pub mod utils;

pub use crate::core::{GameConfig, SpeedPolicy};
pub use game::{
    AudioCue, Cell, Direction, FinalStats, GameEvent, GameRunState, GameSession, Grid, Level,
    LifeLossCause, Snake,
};
pub use host::{AudioSink, FrameClock, GameHost, Renderer, SilentAudio};
pub use records::{JsonRecordStore, Leaderboard, MemoryRecordStore, Record, RecordStore};
