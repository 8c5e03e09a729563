//! Per-tick rules: movement, wall and self collision, food detection.

use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;
use super::types::Level;
use crate::core::config::SpeedPolicy;

/// Kind of collision detected after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// What one simulation step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Collided(Collision),
    /// The head landed on the food.
    Ate,
    Moved,
}

/// Wall first, then self.
pub fn check_collision(snake: &Snake, grid: &Grid) -> Option<Collision> {
    if !grid.contains(snake.head()) {
        return Some(Collision::Wall);
    }
    if snake.hits_itself() {
        return Some(Collision::SelfBite);
    }
    None
}

/// Advance the snake one cell and classify the result.
///
/// Collision is checked before food, so a head that reaches the food on
/// an illegal cell is a collision, never a meal. The snake is not grown
/// here; the caller applies the consequences of [`StepOutcome::Ate`].
pub fn step(snake: &mut Snake, food: &Food, grid: &Grid) -> StepOutcome {
    snake.advance();

    if let Some(collision) = check_collision(snake, grid) {
        return StepOutcome::Collided(collision);
    }

    if snake.head() == food.position() {
        StepOutcome::Ate
    } else {
        StepOutcome::Moved
    }
}

/// Score after eating one food at `level`.
pub fn score_after_meal(score: u32, level: Level) -> u32 {
    score.saturating_add(level.points_per_food())
}

/// Interval after eating one food, `None` when the policy keeps it.
pub fn speed_after_meal(policy: SpeedPolicy, interval_ms: u64) -> Option<u64> {
    let next = policy.next_interval(interval_ms);
    (next != interval_ms).then_some(next)
}

/// `initial / current`, rounded to one decimal.
pub fn speed_multiplier(initial_ms: u64, current_ms: u64) -> f64 {
    let ratio = initial_ms as f64 / current_ms.max(1) as f64;
    (ratio * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Cell, Direction};

    fn grid() -> Grid {
        Grid::with_cell_count(10, 1)
    }

    #[test]
    fn test_plain_move() {
        let mut snake = Snake::new(10);
        let food = Food::at(Cell::new(0, 0));
        assert_eq!(step(&mut snake, &food, &grid()), StepOutcome::Moved);
        assert_eq!(snake.head(), Cell::new(6, 5));
    }

    #[test]
    fn test_wall_collision_each_side() {
        let cases = [
            (Cell::new(9, 4), Direction::Right),
            (Cell::new(0, 4), Direction::Left),
            (Cell::new(4, 0), Direction::Up),
            (Cell::new(4, 9), Direction::Down),
        ];
        for (head, dir) in cases {
            let mut snake = Snake::from_body([head], dir);
            let outcome = step(&mut snake, &Food::at(Cell::new(5, 5)), &grid());
            assert_eq!(outcome, StepOutcome::Collided(Collision::Wall), "{:?}", dir);
        }
    }

    #[test]
    fn test_self_collision() {
        // Head at (5,5) turning right into (6,5), which is still body after the move.
        let mut snake = Snake::from_body(
            [
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(6, 4),
                Cell::new(6, 5),
                Cell::new(6, 6),
            ],
            Direction::Right,
        );
        let outcome = step(&mut snake, &Food::at(Cell::new(0, 0)), &grid());
        assert_eq!(outcome, StepOutcome::Collided(Collision::SelfBite));
    }

    #[test]
    fn test_collision_beats_food_on_wall() {
        // Food cannot be off-board, but a head leaving the board must not eat
        // food whose coordinates match the out-of-bounds cell.
        let mut snake = Snake::from_body([Cell::new(9, 3), Cell::new(8, 3)], Direction::Right);
        let food = Food::at(Cell::new(10, 3));
        assert_eq!(
            step(&mut snake, &food, &grid()),
            StepOutcome::Collided(Collision::Wall)
        );
    }

    #[test]
    fn test_collision_beats_food_on_body() {
        let mut snake = Snake::from_body(
            [
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(6, 4),
                Cell::new(6, 5),
                Cell::new(6, 6),
            ],
            Direction::Right,
        );
        let food = Food::at(Cell::new(6, 5));
        assert_eq!(
            step(&mut snake, &food, &grid()),
            StepOutcome::Collided(Collision::SelfBite)
        );
    }

    #[test]
    fn test_eat_detected() {
        let mut snake = Snake::new(10);
        let food = Food::at(Cell::new(6, 5));
        assert_eq!(step(&mut snake, &food, &grid()), StepOutcome::Ate);
        assert_eq!(snake.len(), 3, "growth is applied by the caller");
    }

    #[test]
    fn test_score_and_speed_helpers() {
        assert_eq!(score_after_meal(4, Level::Hard), 7);
        assert_eq!(speed_after_meal(SpeedPolicy::default(), 200), Some(190));
        assert_eq!(speed_after_meal(SpeedPolicy::default(), 50), None);
        assert_eq!(speed_after_meal(SpeedPolicy::Constant, 200), None);
        assert_eq!(speed_multiplier(200, 200), 1.0);
        assert_eq!(speed_multiplier(200, 150), 1.3);
        assert_eq!(speed_multiplier(60, 50), 1.2);
        assert_eq!(speed_multiplier(60, 0), 60.0);
    }
}
