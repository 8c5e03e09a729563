//! Integration test: the host forwarding events to its collaborators.

use serpent::{
    AudioCue, AudioSink, Cell, Direction, GameConfig, GameHost, GameRunState, GameSession, Level,
    MemoryRecordStore, Renderer,
};
use std::io;

#[derive(Default)]
struct FrameCounter {
    frames: usize,
    last_score: u32,
}

impl Renderer for FrameCounter {
    fn render(&mut self, session: &GameSession) -> io::Result<()> {
        self.frames += 1;
        self.last_score = session.score();
        Ok(())
    }
}

#[derive(Default)]
struct CueLog {
    cues: Vec<AudioCue>,
}

impl AudioSink for CueLog {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

fn host(config: GameConfig) -> GameHost<FrameCounter, CueLog> {
    let session = GameSession::with_seed(config, MemoryRecordStore::new(), 31);
    GameHost::new(session, FrameCounter::default(), CueLog::default())
}

#[test]
fn test_energy_run_out_plays_cues_in_order() {
    let mut host = host(GameConfig {
        grid_cell_count: 200,
        initial_lives: 1,
        food_timeout_ms: 60_000,
        ..GameConfig::default()
    });
    host.start_game(Level::Easy);
    host.session_mut().set_food(Cell::new(0, 0));

    for _ in 0..90 {
        host.frame(100).unwrap();
    }

    assert_eq!(host.session().state(), GameRunState::GameOver);
    assert_eq!(
        host.audio().cues,
        vec![
            AudioCue::EnergyLow,
            AudioCue::LifeLost,
            AudioCue::NewRecord,
            AudioCue::GameOver,
        ]
    );
    assert_eq!(host.renderer().frames, 90);
}

#[test]
fn test_renderer_sees_score_after_meal() {
    let mut host = host(GameConfig::default());
    host.start_game(Level::Medium);
    host.session_mut().set_food(Cell::new(15, 14));

    host.steer(Direction::Up);
    let events = host.frame(100).unwrap();

    assert!(!events.is_empty());
    assert_eq!(host.renderer().last_score, 2);
    assert_eq!(host.audio().cues, vec![AudioCue::Ate]);
}

#[test]
fn test_pause_and_menu_through_host() {
    let mut host = host(GameConfig::default());
    host.start_game(Level::Easy);
    host.toggle_pause();
    host.frame(500).unwrap();
    assert_eq!(host.session().clock_ms(), 0);

    host.return_to_menu();
    assert_eq!(host.session().state(), GameRunState::Stopped);
    host.redraw().unwrap();
    assert_eq!(host.renderer().frames, 2);
    assert!(host.audio().cues.is_empty());
}
