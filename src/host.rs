//! Collaborator seams and the host that wires them to a session.
//!
//! The session only produces [`GameEvent`]s. [`GameHost`] owns the session
//! together with a [`Renderer`] and an [`AudioSink`], forwards input to the
//! session and hands every resulting event to the collaborators.

use crate::game::events::{AudioCue, GameEvent};
use crate::game::session::GameSession;
use crate::game::types::{Direction, Level};
use std::io;
use std::time::{Duration, Instant};

/// Draws the session. Read-only access; called once per frame.
pub trait Renderer {
    fn render(&mut self, session: &GameSession) -> io::Result<()>;
}

/// Plays discrete cues. Fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// An audio sink that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Turns wall-clock instants into whole-millisecond frame deltas.
///
/// The sub-millisecond remainder of each frame stays on the clock and is
/// paid out with a later frame, so the deltas always sum to real time.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self { last: now }
    }

    /// Whole milliseconds since the previous call.
    pub fn tick(&mut self, now: Instant) -> u64 {
        let dt_ms = now.saturating_duration_since(self.last).as_millis() as u64;
        self.last += Duration::from_millis(dt_ms);
        dt_ms
    }
}

pub struct GameHost<R, A> {
    session: GameSession,
    renderer: R,
    audio: A,
}

impl<R: Renderer, A: AudioSink> GameHost<R, A> {
    pub fn new(session: GameSession, renderer: R, audio: A) -> Self {
        Self {
            session,
            renderer,
            audio,
        }
    }

    /// Advance the session by `dt_ms`, play cues and redraw.
    pub fn frame(&mut self, dt_ms: u64) -> io::Result<Vec<GameEvent>> {
        let events = self.session.update(dt_ms);
        self.forward(&events);
        self.renderer.render(&self.session)?;
        Ok(events)
    }

    pub fn redraw(&mut self) -> io::Result<()> {
        self.renderer.render(&self.session)
    }

    pub fn start_game(&mut self, level: Level) -> Vec<GameEvent> {
        let events = self.session.start_game(level);
        self.forward(&events);
        events
    }

    pub fn restart_game(&mut self) -> Vec<GameEvent> {
        let events = self.session.restart_game();
        self.forward(&events);
        events
    }

    pub fn toggle_pause(&mut self) -> Vec<GameEvent> {
        let events = self.session.toggle_pause();
        self.forward(&events);
        events
    }

    pub fn return_to_menu(&mut self) -> Vec<GameEvent> {
        let events = self.session.return_to_menu();
        self.forward(&events);
        events
    }

    pub fn steer(&mut self, direction: Direction) {
        self.session.set_pending_direction(direction);
    }

    fn forward(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(GameEvent::audio_cue) {
            self.audio.play(cue);
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The session alongside the renderer, for frontends that cache
    /// session data in their renderer.
    pub fn session_and_renderer_mut(&mut self) -> (&GameSession, &mut R) {
        (&self.session, &mut self.renderer)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
