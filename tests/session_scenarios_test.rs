//! Integration test: whole runs driven through the public session API.
//!
//! Each scenario feeds frame deltas into `GameSession::update` the way a
//! frontend would and checks the observable outcome.

use serpent::{
    Cell, Direction, GameConfig, GameEvent, GameRunState, GameSession, Level, LifeLossCause,
    MemoryRecordStore,
};

/// Feed `total_ms` in 100ms frames, collecting every event.
fn run_for(session: &mut GameSession, total_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..total_ms / 100 {
        events.extend(session.update(100));
    }
    events
}

/// A board so large the snake never reaches a wall within one energy cycle.
fn open_field_config() -> GameConfig {
    GameConfig {
        grid_cell_count: 200,
        food_timeout_ms: 60_000,
        initial_lives: 1,
        ..GameConfig::default().with_constant_speed()
    }
}

fn life_losses(events: &[GameEvent]) -> Vec<(LifeLossCause, u32)> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::LifeLost { cause, lives_left } => Some((*cause, *lives_left)),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Eating
// =============================================================================

#[test]
fn test_easy_snake_eats_on_fifth_tick() {
    let mut s = GameSession::with_seed(GameConfig::default(), MemoryRecordStore::new(), 1);
    s.start_game(Level::Easy);
    s.set_food(Cell::new(20, 15));

    let events = run_for(&mut s, 800);
    assert_eq!(s.tick_count(), 4);
    assert_eq!(s.score(), 0);
    assert!(s.energy() < 100.0);

    let events_after = run_for(&mut s, 200);
    assert_eq!(s.tick_count(), 5);
    assert!(events
        .iter()
        .all(|e| !matches!(e, GameEvent::Ate { .. })));
    assert!(events_after.contains(&GameEvent::Ate { points: 1, score: 1 }));

    assert_eq!(s.score(), 1);
    assert_eq!(s.snake().len(), 4);
    assert_eq!(s.energy(), 100.0);
    assert_eq!(s.interval_ms(), 190);
    assert!(!s.snake().occupies(s.food()));
    assert!(s.grid().contains(s.food()));
}

#[test]
fn test_hard_level_scores_three_per_food() {
    let mut s = GameSession::with_seed(GameConfig::default(), MemoryRecordStore::new(), 2);
    s.start_game(Level::Hard);
    s.set_food(Cell::new(16, 15));
    s.update(60);
    assert_eq!(s.score(), 3);
    assert_eq!(s.speed_multiplier(), 1.2);
}

#[test]
fn test_steering_turns_on_next_tick() {
    let mut s = GameSession::with_seed(GameConfig::default(), MemoryRecordStore::new(), 3);
    s.start_game(Level::Medium);
    s.set_food(Cell::new(0, 0));

    s.set_pending_direction(Direction::Left);
    s.update(100);
    assert_eq!(s.snake().head(), Cell::new(16, 15), "reversal ignored");

    s.set_pending_direction(Direction::Down);
    s.update(100);
    assert_eq!(s.snake().head(), Cell::new(16, 16));
    assert_eq!(s.snake().direction(), Direction::Down);
}

// =============================================================================
// Losing lives
// =============================================================================

#[test]
fn test_three_wall_collisions_end_the_run() {
    let mut s = GameSession::with_seed(GameConfig::default(), MemoryRecordStore::new(), 4);
    s.start_game(Level::Hard);
    s.set_food(Cell::new(0, 0));

    // 15 ticks of 60ms from the centre to the right wall.
    let events = run_for(&mut s, 1_800);
    assert_eq!(
        life_losses(&events),
        vec![(LifeLossCause::Wall, 2), (LifeLossCause::Wall, 1)]
    );
    assert_eq!(s.state(), GameRunState::Playing);
    assert_eq!(s.lives(), 1);

    let events = run_for(&mut s, 900);
    assert_eq!(life_losses(&events), vec![(LifeLossCause::Wall, 0)]);
    assert_eq!(s.state(), GameRunState::GameOver);
    assert_eq!(s.clock_ms(), 2_700);
    assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
    assert_eq!(s.armed_timers(), 0);

    // Nothing moves after game over.
    let head = s.snake().head();
    assert!(run_for(&mut s, 1_000).is_empty());
    assert_eq!(s.snake().head(), head);
}

#[test]
fn test_self_collision_costs_a_life() {
    let mut s = GameSession::with_seed(GameConfig::default(), MemoryRecordStore::new(), 5);
    s.start_game(Level::Easy);
    s.set_food(Cell::new(0, 0));
    let placed = s.place_snake(serpent::Snake::from_body(
        [
            Cell::new(10, 10),
            Cell::new(9, 10),
            Cell::new(9, 11),
            Cell::new(10, 11),
            Cell::new(11, 11),
        ],
        Direction::Right,
    ));
    assert!(placed);
    s.set_pending_direction(Direction::Down);

    let events = s.update(200);
    assert_eq!(
        life_losses(&events),
        vec![(LifeLossCause::SelfCollision, 2)]
    );
    assert_eq!(s.snake().len(), 3);
}

#[test]
fn test_energy_exhaustion_with_last_life_is_game_over() {
    let mut s = GameSession::with_seed(open_field_config(), MemoryRecordStore::new(), 6);
    s.start_game(Level::Easy);
    s.set_food(Cell::new(0, 0));

    let events = run_for(&mut s, 9_000);

    let lows = events.iter().filter(|e| **e == GameEvent::EnergyLow).count();
    assert_eq!(lows, 1, "low energy alert fires once per cycle");
    assert_eq!(
        life_losses(&events),
        vec![(LifeLossCause::EnergyExhausted, 0)]
    );
    assert_eq!(s.state(), GameRunState::GameOver);
    assert_eq!(s.clock_ms(), 9_000);

    let stats = s.last_stats().cloned().expect("stats after game over");
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, Level::Easy);
    assert_eq!(stats.speed_multiplier, 1.0);
    assert_eq!(stats.new_record, Some(1));
}

#[test]
fn test_energy_is_low_below_twenty_percent() {
    let mut s = GameSession::with_seed(open_field_config(), MemoryRecordStore::new(), 7);
    s.start_game(Level::Easy);
    s.set_food(Cell::new(0, 0));

    run_for(&mut s, 7_000);
    assert!(!s.energy_is_low());
    run_for(&mut s, 300);
    assert!(s.energy_is_low());
    assert_eq!(s.energy_remaining_ms(), 1_700);
}

// =============================================================================
// Pause
// =============================================================================

#[test]
fn test_pause_preserves_remaining_energy() {
    let mut s = GameSession::with_seed(open_field_config(), MemoryRecordStore::new(), 8);
    s.start_game(Level::Easy);
    s.set_food(Cell::new(0, 0));

    run_for(&mut s, 3_000);
    let energy = s.energy();
    let head = s.snake().head();

    assert_eq!(s.toggle_pause(), vec![GameEvent::Paused]);
    assert!(run_for(&mut s, 20_000).is_empty());
    assert_eq!(s.energy(), energy);
    assert_eq!(s.snake().head(), head);

    assert_eq!(s.toggle_pause(), vec![GameEvent::Resumed]);

    // Exhaustion lands exactly duration - 3000ms of play after resuming.
    let events = run_for(&mut s, 5_900);
    assert!(life_losses(&events).is_empty());
    let events = run_for(&mut s, 100);
    assert_eq!(
        life_losses(&events),
        vec![(LifeLossCause::EnergyExhausted, 0)]
    );
    assert_eq!(s.clock_ms(), 9_000);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_restart_after_game_over_resets_the_run() {
    let mut s = GameSession::with_seed(open_field_config(), MemoryRecordStore::new(), 9);
    s.start_game(Level::Medium);
    s.set_food(Cell::new(0, 0));
    run_for(&mut s, 9_000);
    assert_eq!(s.state(), GameRunState::GameOver);

    assert_eq!(
        s.restart_game(),
        vec![GameEvent::Started {
            level: Level::Medium
        }]
    );
    assert_eq!(s.state(), GameRunState::Playing);
    assert_eq!(s.lives(), 1);
    assert_eq!(s.score(), 0);
    assert_eq!(s.clock_ms(), 0);
    assert_eq!(s.energy(), 100.0);
    assert!(s.last_stats().is_none());
    assert_eq!(s.armed_timers(), 3);
}

#[test]
fn test_menu_from_pause_then_new_level() {
    let mut s = GameSession::with_seed(GameConfig::default(), MemoryRecordStore::new(), 10);
    s.start_game(Level::Easy);
    s.toggle_pause();
    assert_eq!(s.return_to_menu(), vec![GameEvent::ReturnedToMenu]);
    assert_eq!(s.state(), GameRunState::Stopped);

    s.start_game(Level::Hard);
    assert_eq!(s.level(), Level::Hard);
    assert_eq!(s.interval_ms(), 60);
}
