//! Terminal frontend built on ratatui.

pub mod game_common;
pub mod game_scene;
pub mod menu_scene;
pub mod records_scene;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use serpent::{GameEvent, GameRunState, GameSession, Leaderboard, Renderer};
use std::io::{self, Stdout};

/// Smallest terminal that fits the default board and the info panel.
const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 22;

/// Modal drawn over whatever screen the session is on.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Records(Leaderboard),
    ConfirmClear(Leaderboard),
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

pub struct TerminalRenderer<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    overlay: Overlay,
    /// Leaderboard shown on the menu, refreshed only when records can change.
    menu_board: Leaderboard,
}

impl TerminalRenderer {
    /// Enter raw mode and the alternate screen.
    pub fn new(menu_board: Leaderboard) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, menu_board))
    }

    /// Leave the alternate screen and restore the cursor.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()
    }
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn with_terminal(terminal: Terminal<B>, menu_board: Leaderboard) -> Self {
        Self {
            terminal,
            overlay: Overlay::None,
            menu_board,
        }
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Refresh the cached menu leaderboard after a run ends or the player
    /// leaves for the menu.
    pub fn observe(&mut self, events: &[GameEvent], session: &GameSession) {
        let records_changed = events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. } | GameEvent::ReturnedToMenu));
        if records_changed {
            self.menu_board = session.leaderboard();
        }
    }

    pub fn show_records(&mut self, leaderboard: Leaderboard) {
        self.menu_board = leaderboard.clone();
        self.overlay = Overlay::Records(leaderboard);
    }

    pub fn confirm_clear(&mut self, leaderboard: Leaderboard) {
        self.overlay = Overlay::ConfirmClear(leaderboard);
    }

    pub fn close_records(&mut self) {
        self.overlay = Overlay::None;
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, session: &GameSession) -> io::Result<()> {
        let overlay = &self.overlay;
        let menu_board = &self.menu_board;
        self.terminal
            .draw(|frame| draw(frame, session, overlay, menu_board))?;
        Ok(())
    }
}

fn draw(frame: &mut Frame, session: &GameSession, overlay: &Overlay, menu_board: &Leaderboard) {
    let area = frame.size();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(frame, area);
        return;
    }

    match session.state() {
        GameRunState::Stopped => menu_scene::render_menu_scene(frame, area, menu_board),
        _ => game_scene::render_game_scene(frame, area, session),
    }

    match overlay {
        Overlay::None => {}
        Overlay::Records(leaderboard) => records_scene::render_records(frame, area, leaderboard),
        Overlay::ConfirmClear(leaderboard) => {
            records_scene::render_confirm_clear(frame, area, leaderboard)
        }
    }
}

fn draw_too_small(frame: &mut Frame, area: Rect) {
    let message = format!(
        "Terminal too small: {}x{} (need {}x{})",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );
    let text = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use serpent::{GameConfig, Level, Record, RecordStore};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Memory store that counts how often the board is read.
    struct CountingStore {
        records: Vec<Record>,
        loads: Rc<Cell<usize>>,
    }

    impl RecordStore for CountingStore {
        fn load_records(&self) -> Vec<Record> {
            self.loads.set(self.loads.get() + 1);
            self.records.clone()
        }

        fn save_records(&mut self, records: &[Record]) -> io::Result<()> {
            self.records = records.to_vec();
            Ok(())
        }

        fn clear_records(&mut self) -> io::Result<()> {
            self.records.clear();
            Ok(())
        }
    }

    fn setup() -> (
        GameSession,
        TerminalRenderer<TestBackend>,
        Rc<Cell<usize>>,
    ) {
        let loads = Rc::new(Cell::new(0));
        let store = CountingStore {
            records: Vec::new(),
            loads: Rc::clone(&loads),
        };
        let session = GameSession::with_seed(GameConfig::default(), store, 7);
        let terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let renderer = TerminalRenderer::with_terminal(terminal, session.leaderboard());
        loads.set(0);
        (session, renderer, loads)
    }

    #[test]
    fn test_menu_frames_do_not_read_the_store() {
        let (session, mut renderer, loads) = setup();
        for _ in 0..60 {
            renderer.render(&session).unwrap();
        }
        assert_eq!(loads.get(), 0);
    }

    #[test]
    fn test_menu_board_refreshes_on_return_to_menu() {
        let (mut session, mut renderer, loads) = setup();
        let events = session.start_game(Level::Easy);
        renderer.observe(&events, &session);
        assert_eq!(loads.get(), 0);

        let events = session.return_to_menu();
        renderer.observe(&events, &session);
        assert_eq!(loads.get(), 1);
    }

    #[test]
    fn test_game_frames_render_without_overlay() {
        let (mut session, mut renderer, _) = setup();
        session.start_game(Level::Medium);
        renderer.render(&session).unwrap();
        assert!(!renderer.overlay().is_open());
        renderer.show_records(session.leaderboard());
        assert!(renderer.overlay().is_open());
        renderer.close_records();
        assert_eq!(renderer.overlay(), &Overlay::None);
    }
}
