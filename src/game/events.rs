//! Events produced by the session for the presentation layer.
//!
//! The simulation never talks to a renderer or audio device directly; it
//! returns these from [`crate::GameSession::update`] and the input methods,
//! and the host maps them to collaborators.

use super::types::Level;

/// Why a life was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeLossCause {
    Wall,
    SelfCollision,
    EnergyExhausted,
}

/// Statistics frozen at game over.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalStats {
    pub score: u32,
    pub level: Level,
    /// `initial interval / final interval`, one decimal.
    pub speed_multiplier: f64,
    /// 1-based leaderboard rank if the run made the board.
    pub new_record: Option<usize>,
}

/// Something that happened during a session call, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Started { level: Level },
    Paused,
    Resumed,
    ReturnedToMenu,
    /// Food consumed on this tick.
    Ate { points: u32, score: u32 },
    /// The tick interval was rebuilt.
    SpeedChanged { interval_ms: u64 },
    /// Uneaten food timed out and moved.
    FoodRelocated,
    LifeLost { cause: LifeLossCause, lives_left: u32 },
    /// Energy crossed the alert threshold.
    EnergyLow,
    NewRecord { rank: usize },
    GameOver { stats: FinalStats },
    /// A tick finished without collision; redraw.
    TickComplete,
}

/// Discrete sounds the audio collaborator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Ate,
    LifeLost,
    EnergyLow,
    NewRecord,
    GameOver,
}

impl GameEvent {
    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            GameEvent::Ate { .. } => Some(AudioCue::Ate),
            GameEvent::LifeLost { .. } => Some(AudioCue::LifeLost),
            GameEvent::EnergyLow => Some(AudioCue::EnergyLow),
            GameEvent::NewRecord { .. } => Some(AudioCue::NewRecord),
            GameEvent::GameOver { .. } => Some(AudioCue::GameOver),
            GameEvent::Started { .. }
            | GameEvent::Paused
            | GameEvent::Resumed
            | GameEvent::ReturnedToMenu
            | GameEvent::SpeedChanged { .. }
            | GameEvent::FoodRelocated
            | GameEvent::TickComplete => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_cues() {
        assert_eq!(
            GameEvent::Ate { points: 1, score: 1 }.audio_cue(),
            Some(AudioCue::Ate)
        );
        assert_eq!(
            GameEvent::LifeLost {
                cause: LifeLossCause::Wall,
                lives_left: 2
            }
            .audio_cue(),
            Some(AudioCue::LifeLost)
        );
        assert_eq!(GameEvent::EnergyLow.audio_cue(), Some(AudioCue::EnergyLow));
        assert_eq!(
            GameEvent::NewRecord { rank: 1 }.audio_cue(),
            Some(AudioCue::NewRecord)
        );
        assert_eq!(GameEvent::TickComplete.audio_cue(), None);
        assert_eq!(GameEvent::FoodRelocated.audio_cue(), None);
    }
}
