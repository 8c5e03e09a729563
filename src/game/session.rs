//! Game session: the run state machine and its cooperative scheduler.
//!
//! One [`GameSession`] owns everything a run needs. Time only enters through
//! [`GameSession::update`], which advances a logical clock while the run is
//! playing and fires the tick, energy-poll and food-timeout timers in that
//! fixed order whenever they fall due at the same instant.

use super::energy::{EnergyClock, EnergySignal};
use super::events::{FinalStats, GameEvent, LifeLossCause};
use super::food::Food;
use super::grid::Grid;
use super::rules::{self, Collision, StepOutcome};
use super::snake::Snake;
use super::timer::IntervalTimer;
use super::types::{Cell, Direction, GameRunState, Level};
use crate::core::config::GameConfig;
use crate::core::constants::{DEFAULT_PLAYER_NAME, MAX_FRAME_MS};
use crate::records::{self, Leaderboard, Record, RecordStore};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::{debug, info, warn};

pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    state: GameRunState,
    level: Level,

    snake: Snake,
    food: Food,
    energy: EnergyClock,

    score: u32,
    lives: u32,
    /// Current tick interval in milliseconds.
    interval_ms: u64,

    tick_timer: IntervalTimer,
    energy_timer: IntervalTimer,
    food_timer: IntervalTimer,

    /// Logical milliseconds played in this run (never advances while paused).
    clock_ms: u64,
    tick_count: u64,
    last_stats: Option<FinalStats>,

    records: Box<dyn RecordStore>,
    rng: StdRng,
}

impl GameSession {
    /// A stopped session with an entropy-seeded food RNG.
    pub fn new(config: GameConfig, records: impl RecordStore + 'static) -> Self {
        Self::with_rng(config, Box::new(records), StdRng::from_entropy())
    }

    /// A stopped session with a deterministic food RNG.
    pub fn with_seed(config: GameConfig, records: impl RecordStore + 'static, seed: u64) -> Self {
        Self::with_rng(config, Box::new(records), StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, records: Box<dyn RecordStore>, rng: StdRng) -> Self {
        let grid = Grid::with_cell_count(config.grid_cell_count, config.cell_size_px);
        let level = Level::Easy;
        Self {
            grid,
            state: GameRunState::Stopped,
            level,
            snake: Snake::new(grid.cell_count()),
            food: Food::default(),
            energy: EnergyClock::new(config.energy_duration_ms),
            score: 0,
            lives: config.initial_lives,
            interval_ms: level.initial_interval_ms(),
            tick_timer: IntervalTimer::new(level.initial_interval_ms()),
            energy_timer: IntervalTimer::new(config.energy_poll_ms),
            food_timer: IntervalTimer::new(config.food_timeout_ms),
            clock_ms: 0,
            tick_count: 0,
            last_stats: None,
            records,
            rng,
            config,
        }
    }

    // ── Transitions ─────────────────────────────────────────────────

    /// Begin a run at `level`. Only valid from the menu or game over.
    pub fn start_game(&mut self, level: Level) -> Vec<GameEvent> {
        if matches!(self.state, GameRunState::Playing | GameRunState::Paused) {
            return Vec::new();
        }

        self.level = level;
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.interval_ms = level.initial_interval_ms();
        self.clock_ms = 0;
        self.tick_count = 0;
        self.last_stats = None;

        self.snake.reset(self.grid.cell_count());
        self.food
            .place(self.snake.body(), self.grid.cell_count(), &mut self.rng);

        self.energy.restart();
        self.energy_timer.arm();
        self.food_timer.arm();
        self.tick_timer.rearm_with(self.interval_ms);

        self.state = GameRunState::Playing;
        info!(level = level.as_str(), interval_ms = self.interval_ms, "run started");
        vec![GameEvent::Started { level }]
    }

    /// Start again at the same level after a game over.
    pub fn restart_game(&mut self) -> Vec<GameEvent> {
        if self.state != GameRunState::GameOver {
            return Vec::new();
        }
        self.start_game(self.level)
    }

    /// Pause a playing run or resume a paused one.
    ///
    /// Pausing freezes the logical clock, which suspends all three timers
    /// and the energy drain together; resuming continues them where they were.
    pub fn toggle_pause(&mut self) -> Vec<GameEvent> {
        match self.state {
            GameRunState::Playing => {
                self.state = GameRunState::Paused;
                info!(clock_ms = self.clock_ms, energy = self.energy.level(), "paused");
                vec![GameEvent::Paused]
            }
            GameRunState::Paused => {
                self.state = GameRunState::Playing;
                info!(clock_ms = self.clock_ms, "resumed");
                vec![GameEvent::Resumed]
            }
            GameRunState::Stopped | GameRunState::GameOver => Vec::new(),
        }
    }

    /// Abandon whatever is happening and go back to the menu.
    pub fn return_to_menu(&mut self) -> Vec<GameEvent> {
        self.cancel_timers();
        if self.state == GameRunState::Stopped {
            return Vec::new();
        }
        self.state = GameRunState::Stopped;
        info!("returned to menu");
        vec![GameEvent::ReturnedToMenu]
    }

    /// Queue a turn. Ignored unless playing; reversals are ignored by the snake.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if self.state == GameRunState::Playing {
            self.snake.set_pending_direction(direction);
        }
    }

    // ── Scheduler ───────────────────────────────────────────────────

    /// Advance the run by `dt_ms` of real time (clamped to `MAX_FRAME_MS`).
    pub fn update(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut remaining = dt_ms.min(MAX_FRAME_MS);

        while remaining > 0 && self.state == GameRunState::Playing {
            let step = [
                self.tick_timer.until_due(),
                self.energy_timer.until_due(),
                self.food_timer.until_due(),
            ]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(remaining)
            .min(remaining);

            self.elapse(step);
            remaining -= step;
            self.dispatch_due(&mut events);
        }

        events
    }

    fn elapse(&mut self, ms: u64) {
        self.clock_ms += ms;
        self.tick_timer.elapse(ms);
        self.energy_timer.elapse(ms);
        self.food_timer.elapse(ms);
        self.energy.advance(ms);
    }

    fn dispatch_due(&mut self, events: &mut Vec<GameEvent>) {
        if self.tick_timer.take_due() {
            self.run_tick(events);
            if self.state != GameRunState::Playing {
                return;
            }
        }
        if self.energy_timer.take_due() {
            self.poll_energy(events);
            if self.state != GameRunState::Playing {
                return;
            }
        }
        if self.food_timer.take_due() {
            self.relocate_food(events);
        }
    }

    fn cancel_timers(&mut self) {
        self.tick_timer.cancel();
        self.energy_timer.cancel();
        self.food_timer.cancel();
        self.energy.stop();
    }

    // ── Sub-systems ─────────────────────────────────────────────────

    fn run_tick(&mut self, events: &mut Vec<GameEvent>) {
        self.tick_count += 1;

        match rules::step(&mut self.snake, &self.food, &self.grid) {
            StepOutcome::Collided(collision) => {
                let cause = match collision {
                    Collision::Wall => LifeLossCause::Wall,
                    Collision::SelfBite => LifeLossCause::SelfCollision,
                };
                // No food check, no redraw event on a collision tick.
                self.lose_life(cause, events);
            }
            StepOutcome::Ate => {
                self.consume_food(events);
                events.push(GameEvent::TickComplete);
            }
            StepOutcome::Moved => events.push(GameEvent::TickComplete),
        }
    }

    fn consume_food(&mut self, events: &mut Vec<GameEvent>) {
        let points = self.level.points_per_food();
        self.score = rules::score_after_meal(self.score, self.level);
        self.snake.grow();

        if let Some(interval_ms) = rules::speed_after_meal(self.config.speed_policy, self.interval_ms)
        {
            self.interval_ms = interval_ms;
            self.tick_timer.rearm_with(interval_ms);
            debug!(interval_ms, "tick interval rebuilt");
            events.push(GameEvent::SpeedChanged { interval_ms });
        }

        self.restore_energy();
        self.food
            .place(self.snake.body(), self.grid.cell_count(), &mut self.rng);
        self.food_timer.arm();

        events.push(GameEvent::Ate {
            points,
            score: self.score,
        });
    }

    fn poll_energy(&mut self, events: &mut Vec<GameEvent>) {
        match self.energy.sample() {
            Some(EnergySignal::LowAlert) => events.push(GameEvent::EnergyLow),
            Some(EnergySignal::Exhausted) => {
                self.energy_timer.cancel();
                self.lose_life(LifeLossCause::EnergyExhausted, events);
            }
            None => {}
        }
    }

    fn relocate_food(&mut self, events: &mut Vec<GameEvent>) {
        if self
            .food
            .place(self.snake.body(), self.grid.cell_count(), &mut self.rng)
            .is_some()
        {
            events.push(GameEvent::FoodRelocated);
        }
    }

    fn restore_energy(&mut self) {
        self.energy.restart();
        self.energy_timer.arm();
    }

    fn lose_life(&mut self, cause: LifeLossCause, events: &mut Vec<GameEvent>) {
        self.lives = self.lives.saturating_sub(1);
        debug!(?cause, lives_left = self.lives, "life lost");
        events.push(GameEvent::LifeLost {
            cause,
            lives_left: self.lives,
        });

        if self.lives == 0 {
            self.game_over(events);
        } else {
            self.snake.reset(self.grid.cell_count());
            self.restore_energy();
        }
    }

    fn game_over(&mut self, events: &mut Vec<GameEvent>) {
        self.state = GameRunState::GameOver;
        self.cancel_timers();

        let speed_multiplier = self.speed_multiplier();
        let new_record = self.record_run(speed_multiplier);
        if let Some(rank) = new_record {
            events.push(GameEvent::NewRecord { rank });
        }

        let stats = FinalStats {
            score: self.score,
            level: self.level,
            speed_multiplier,
            new_record,
        };
        info!(
            score = stats.score,
            level = stats.level.as_str(),
            speed = stats.speed_multiplier,
            rank = ?stats.new_record,
            "game over"
        );
        self.last_stats = Some(stats.clone());
        events.push(GameEvent::GameOver { stats });
    }

    /// Add the finished run to the leaderboard if it qualifies.
    fn record_run(&mut self, speed_multiplier: f64) -> Option<usize> {
        let record = Record {
            name: DEFAULT_PLAYER_NAME.to_string(),
            score: self.score,
            level: self.level,
            speed_multiplier,
            timestamp: Utc::now().timestamp(),
        };
        match records::add_record(self.records.as_mut(), record, self.config.max_records) {
            Ok(rank) => rank,
            Err(e) => {
                warn!("failed to save records: {}", e);
                None
            }
        }
    }

    // ── Records ─────────────────────────────────────────────────────

    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_records(self.records.load_records(), self.config.max_records)
    }

    pub fn clear_records(&mut self) -> io::Result<()> {
        info!("records cleared");
        self.records.clear_records()
    }

    // ── Read access for renderers ───────────────────────────────────

    pub fn state(&self) -> GameRunState {
        self.state
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food.position()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Energy percentage as of the last poll.
    pub fn energy(&self) -> f64 {
        self.energy.level()
    }

    pub fn energy_is_low(&self) -> bool {
        self.energy.is_low()
    }

    /// Logical time left before the energy runs out.
    pub fn energy_remaining_ms(&self) -> u64 {
        self.energy.remaining_ms()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// `initial interval / current interval`, one decimal.
    pub fn speed_multiplier(&self) -> f64 {
        rules::speed_multiplier(self.level.initial_interval_ms(), self.interval_ms)
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Stats of the most recent game over, until the next run starts.
    pub fn last_stats(&self) -> Option<&FinalStats> {
        self.last_stats.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of armed timers (tick, energy poll, food timeout).
    pub fn armed_timers(&self) -> usize {
        [&self.tick_timer, &self.energy_timer, &self.food_timer]
            .iter()
            .filter(|t| t.is_armed())
            .count()
    }

    // ── Scenario setup ──────────────────────────────────────────────
    //
    // Seams for tests and replays. Both refuse states a run could never
    // reach, so they cannot break the board invariants.

    /// Put the food on `cell`. Rejected off the grid or under the snake.
    #[doc(hidden)]
    pub fn set_food(&mut self, cell: Cell) -> bool {
        if !self.grid.contains(cell) || self.snake.occupies(cell) {
            return false;
        }
        self.food = Food::at(cell);
        true
    }

    /// Replace the snake. Rejected unless every segment is on the grid,
    /// consecutive segments are adjacent and no segment overlaps another.
    #[doc(hidden)]
    pub fn place_snake(&mut self, snake: Snake) -> bool {
        let on_grid = snake.body().iter().all(|&c| self.grid.contains(c));
        let distinct = snake
            .body()
            .iter()
            .enumerate()
            .all(|(i, c)| !snake.body().iter().skip(i + 1).any(|other| other == c));
        if snake.is_empty() || !on_grid || !distinct || !snake.is_contiguous() {
            return false;
        }
        self.snake = snake;
        true
    }
}
