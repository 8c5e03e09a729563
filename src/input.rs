//! Keyboard mapping for the terminal frontend.
//!
//! Maps a key press to an [`Action`] given the screen it arrived on, so the
//! frame loop only has to apply actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serpent::{Direction, GameRunState, Level};

/// Which screen currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
    Records,
    ConfirmClear,
}

impl Screen {
    /// Records overlays take the keyboard before the session screen does.
    pub fn resolve(state: GameRunState, records_open: bool, confirming: bool) -> Self {
        if confirming {
            return Screen::ConfirmClear;
        }
        if records_open {
            return Screen::Records;
        }
        match state {
            GameRunState::Stopped => Screen::Menu,
            GameRunState::Playing => Screen::Playing,
            GameRunState::Paused => Screen::Paused,
            GameRunState::GameOver => Screen::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Steer(Direction),
    TogglePause,
    Start(Level),
    Restart,
    Menu,
    ShowRecords,
    CloseRecords,
    AskClearRecords,
    ConfirmClear,
    CancelClear,
    Quit,
}

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Map a key event to an action. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent, screen: Screen) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmClear),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CancelClear),
            _ => None,
        },
        Screen::Records => match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::AskClearRecords),
            KeyCode::Esc | KeyCode::Char('v') | KeyCode::Char('V') => Some(Action::CloseRecords),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Menu => match key.code {
            KeyCode::Char('1') => Some(Action::Start(Level::Easy)),
            KeyCode::Char('2') => Some(Action::Start(Level::Medium)),
            KeyCode::Char('3') => Some(Action::Start(Level::Hard)),
            KeyCode::Enter => Some(Action::Start(Level::Easy)),
            KeyCode::Char('v') | KeyCode::Char('V') => Some(Action::ShowRecords),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Screen::Playing => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(Action::TogglePause)
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Menu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            code => direction_for(code).map(Action::Steer),
        },
        Screen::Paused => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(Action::TogglePause)
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Menu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        },
        Screen::GameOver => match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => Some(Action::Restart),
            KeyCode::Char('v') | KeyCode::Char('V') => Some(Action::ShowRecords),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Menu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
            _ => None,
        },
    }
}
