mod audio;
mod input;
mod ui;

use anyhow::{Context, Result};
use audio::BellAudio;
use clap::Parser;
use crossterm::event::{self, Event};
use input::{action_for, Action, Screen};
use serpent::core::constants::{FRAME_POLL_MS, LOG_FILE};
use serpent::utils::{build_info, persistence};
use serpent::{
    FrameClock, GameConfig, GameEvent, GameHost, GameSession, JsonRecordStore, Leaderboard, Level,
    RecordStore,
};
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{Overlay, TerminalRenderer};

#[derive(Parser, Debug)]
#[command(name = "serpent", about = "Snake with an energy clock", disable_version_flag = true)]
struct Args {
    /// Skip the menu and start at this level
    #[arg(long)]
    level: Option<Level>,

    /// Disable the terminal bell
    #[arg(long)]
    mute: bool,

    /// Print the leaderboard and exit
    #[arg(long)]
    records: bool,

    /// Delete all records and exit
    #[arg(long)]
    clear_records: bool,

    /// Keep the tick interval fixed for the whole run
    #[arg(long)]
    constant_speed: bool,

    /// Print version information
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    init_logging();

    let mut config = GameConfig::default();
    if args.constant_speed {
        config = config.with_constant_speed();
    }

    let mut store = JsonRecordStore::new().context("failed to locate the records file")?;

    if args.clear_records {
        store
            .clear_records()
            .with_context(|| format!("failed to clear {}", store.path().display()))?;
        println!("Records cleared.");
        return Ok(());
    }

    if args.records {
        let leaderboard = Leaderboard::from_records(store.load_records(), config.max_records);
        print_records(&leaderboard);
        return Ok(());
    }

    let session = GameSession::new(config, store);
    let renderer =
        TerminalRenderer::new(session.leaderboard()).context("failed to set up the terminal")?;
    let mut host = GameHost::new(session, renderer, BellAudio::new(!args.mute));

    if let Some(level) = args.level {
        host.start_game(level);
    }

    let result = run(&mut host);

    host.renderer_mut()
        .restore()
        .context("failed to restore the terminal")?;
    result
}

fn run(host: &mut GameHost<TerminalRenderer, BellAudio>) -> Result<()> {
    info!("frontend started");
    let mut clock = FrameClock::new(Instant::now());

    loop {
        let events = host
            .frame(clock.tick(Instant::now()))
            .context("failed to draw frame")?;
        observe(host, &events);

        if !event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            continue;
        }
        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                host.redraw().context("failed to redraw after resize")?;
                continue;
            }
            _ => continue,
        };

        let overlay = host.renderer().overlay();
        let screen = Screen::resolve(
            host.session().state(),
            overlay.is_open(),
            matches!(overlay, Overlay::ConfirmClear(_)),
        );
        let Some(action) = action_for(key, screen) else {
            continue;
        };

        match action {
            Action::Quit => break,
            Action::Steer(direction) => host.steer(direction),
            Action::TogglePause => {
                host.toggle_pause();
            }
            Action::Start(level) => {
                host.start_game(level);
            }
            Action::Restart => {
                host.restart_game();
            }
            Action::Menu => {
                let events = host.return_to_menu();
                observe(host, &events);
            }
            Action::ShowRecords | Action::CancelClear => {
                let leaderboard = host.session().leaderboard();
                host.renderer_mut().show_records(leaderboard);
            }
            Action::CloseRecords => host.renderer_mut().close_records(),
            Action::AskClearRecords => {
                let leaderboard = host.session().leaderboard();
                host.renderer_mut().confirm_clear(leaderboard);
            }
            Action::ConfirmClear => {
                if let Err(e) = host.session_mut().clear_records() {
                    warn!("failed to clear records: {}", e);
                }
                let leaderboard = host.session().leaderboard();
                host.renderer_mut().show_records(leaderboard);
            }
        }
    }

    info!("frontend stopped");
    Ok(())
}

fn observe(host: &mut GameHost<TerminalRenderer, BellAudio>, events: &[GameEvent]) {
    if events.is_empty() {
        return;
    }
    let (session, renderer) = host.session_and_renderer_mut();
    renderer.observe(events, session);
}

/// Log to `~/.serpent/serpent.log`; the terminal belongs to the game.
fn init_logging() {
    let Ok(path) = persistence::save_path(LOG_FILE) else {
        return;
    };
    let Ok(file) = File::options().create(true).append(true).open(path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn print_records(leaderboard: &Leaderboard) {
    if leaderboard.is_empty() {
        println!("No records yet.");
        return;
    }
    for (i, record) in leaderboard.entries().iter().enumerate() {
        println!("{}", ui::records_scene::record_row(i + 1, record));
    }
}
