//! Snake model: body, heading and the buffered turn.

use super::types::{Cell, Direction};
use crate::core::constants::INITIAL_SNAKE_LENGTH;
use std::collections::VecDeque;

/// The snake. The head is at the front of `body` (index 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    /// Turn requested by input, committed on the next `advance`.
    pending: Direction,
}

impl Snake {
    /// A freshly reset snake centred on a grid of `cell_count` cells per side.
    pub fn new(cell_count: i16) -> Self {
        let mut snake = Self {
            body: VecDeque::with_capacity(INITIAL_SNAKE_LENGTH),
            direction: Direction::Right,
            pending: Direction::Right,
        };
        snake.reset(cell_count);
        snake
    }

    /// Build a snake from explicit segments, head first.
    pub fn from_body(body: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
            pending: direction,
        }
    }

    /// Three cells, horizontal, centred, facing right.
    pub fn reset(&mut self, cell_count: i16) {
        let center = cell_count / 2;
        self.body.clear();
        for i in 0..INITIAL_SNAKE_LENGTH as i16 {
            self.body.push_back(Cell::new(center - i, center));
        }
        self.direction = Direction::Right;
        self.pending = Direction::Right;
    }

    /// Queue a turn. A reversal of the current heading is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !direction.is_reverse_of(self.direction) {
            self.pending = direction;
        }
    }

    /// Move one cell: commit the pending turn, push a new head, drop the tail.
    pub fn advance(&mut self) {
        // Checked again at commit time in case the heading changed since queueing.
        if !self.pending.is_reverse_of(self.direction) {
            self.direction = self.pending;
        }

        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        self.body.pop_back();
    }

    /// Duplicate the tail, so the next `advance` keeps the old tail segment.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.body.back() {
            self.body.push_back(tail);
        }
    }

    pub fn head(&self) -> Cell {
        self.body.front().copied().unwrap_or(Cell::new(0, 0))
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// True if the head shares a cell with any other segment.
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// Consecutive segments are adjacent (or equal, right after `grow`).
    pub fn is_contiguous(&self) -> bool {
        self.body
            .iter()
            .zip(self.body.iter().skip(1))
            .all(|(a, b)| a == b || a.is_adjacent(*b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_places_three_cells_centered_facing_right() {
        let snake = Snake::new(30);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(15, 15));
        assert_eq!(snake.body()[1], Cell::new(14, 15));
        assert_eq!(snake.body()[2], Cell::new(13, 15));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
        assert!(snake.is_contiguous());
    }

    #[test]
    fn test_reset_clears_pending_turn() {
        let mut snake = Snake::new(30);
        snake.set_pending_direction(Direction::Up);
        snake.reset(30);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn test_reversal_is_rejected() {
        for dir in Direction::ALL {
            let mut snake = Snake::from_body([Cell::new(5, 5)], dir);
            snake.set_pending_direction(dir.opposite());
            assert_eq!(snake.pending_direction(), dir, "{:?} reversal accepted", dir);
        }
    }

    #[test]
    fn test_reversal_checked_against_current_not_pending() {
        let mut snake = Snake::new(30);
        snake.set_pending_direction(Direction::Up);
        // Down reverses Up (the pending turn) but not Right (the heading).
        snake.set_pending_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn test_advance_moves_head_and_preserves_length() {
        let mut snake = Snake::new(30);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(16, 15));
        assert_eq!(snake.len(), 3);

        snake.set_pending_direction(Direction::Down);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(16, 16));
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.len(), 3);
        assert!(snake.is_contiguous());
    }

    #[test]
    fn test_grow_then_advance_adds_one_segment() {
        let mut snake = Snake::new(30);
        let tail = *snake.body().back().unwrap();
        snake.grow();
        snake.advance();
        assert_eq!(snake.len(), 4);
        assert_eq!(*snake.body().back().unwrap(), tail);
        assert!(snake.is_contiguous());
    }

    #[test]
    fn test_hits_itself() {
        // Head at (6,5) also appears later in the body.
        let snake = Snake::from_body(
            [
                Cell::new(6, 5),
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(6, 4),
                Cell::new(6, 5),
            ],
            Direction::Right,
        );
        assert!(snake.hits_itself());
        assert!(!Snake::new(30).hits_itself());
    }
}
