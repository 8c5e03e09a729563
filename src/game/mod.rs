//! Snake simulation: geometry, models, rules, timing and the session.

pub mod energy;
pub mod events;
pub mod food;
pub mod grid;
pub mod rules;
pub mod session;
pub mod snake;
pub mod timer;
pub mod types;

pub use events::{AudioCue, FinalStats, GameEvent, LifeLossCause};
pub use grid::Grid;
pub use session::GameSession;
pub use snake::Snake;
pub use types::{Cell, Direction, GameRunState, Level};
