//! Food model: a single food cell placed at random on a free cell.

use super::types::Cell;
use rand::Rng;
use std::collections::HashSet;

/// The active food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Default for Food {
    fn default() -> Self {
        Self {
            position: Cell::new(0, 0),
        }
    }
}

impl Food {
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a uniformly random cell not in `occupied`.
    ///
    /// Returns the new position, or `None` (food left where it was) when
    /// `occupied` covers every cell of the grid. Placement needs at least
    /// one free cell: `cell_count² - snake length >= 1`.
    pub fn place<'a, R: Rng>(
        &mut self,
        occupied: impl IntoIterator<Item = &'a Cell>,
        cell_count: i16,
        rng: &mut R,
    ) -> Option<Cell> {
        let position = random_free_cell(occupied, cell_count, rng)?;
        self.position = position;
        Some(position)
    }
}

/// Rejection-sample a random cell of the grid that is not in `occupied`.
pub fn random_free_cell<'a, R: Rng>(
    occupied: impl IntoIterator<Item = &'a Cell>,
    cell_count: i16,
    rng: &mut R,
) -> Option<Cell> {
    if cell_count <= 0 {
        return None;
    }
    let occupied: HashSet<Cell> = occupied
        .into_iter()
        .copied()
        .filter(|c| (0..cell_count).contains(&c.x) && (0..cell_count).contains(&c.y))
        .collect();
    let total = cell_count as usize * cell_count as usize;
    if occupied.len() >= total {
        return None;
    }

    loop {
        let x = rng.gen_range(0..cell_count);
        let y = rng.gen_range(0..cell_count);
        let pos = Cell::new(x, y);
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_place_avoids_occupied_cells_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cell_count = 6;
        let all: Vec<Cell> = (0..cell_count)
            .flat_map(|y| (0..cell_count).map(move |x| Cell::new(x, y)))
            .collect();

        for _ in 0..1000 {
            // Random occupied set strictly smaller than the grid.
            let keep = rng.gen_range(0..all.len());
            let occupied: Vec<Cell> = all
                .iter()
                .copied()
                .filter(|_| rng.gen_range(0..all.len()) < keep)
                .collect();
            if occupied.len() >= all.len() {
                continue;
            }
            let mut food = Food::default();
            let pos = food.place(&occupied, cell_count, &mut rng).unwrap();
            assert!(!occupied.contains(&pos));
            assert!((0..cell_count).contains(&pos.x));
            assert!((0..cell_count).contains(&pos.y));
            assert_eq!(food.position(), pos);
        }
    }

    #[test]
    fn test_place_finds_the_only_free_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let occupied: Vec<Cell> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|&c| c != Cell::new(2, 1))
            .collect();
        let mut food = Food::default();
        assert_eq!(food.place(&occupied, 3, &mut rng), Some(Cell::new(2, 1)));
    }

    #[test]
    fn test_place_on_full_board_keeps_position() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let occupied: Vec<Cell> = (0..2)
            .flat_map(|y| (0..2).map(move |x| Cell::new(x, y)))
            .collect();
        let mut food = Food::at(Cell::new(1, 1));
        assert_eq!(food.place(&occupied, 2, &mut rng), None);
        assert_eq!(food.position(), Cell::new(1, 1));
    }

    #[test]
    fn test_off_board_cells_do_not_count_as_occupied() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let occupied = [Cell::new(-1, 0), Cell::new(0, 0)];
        let pos = random_free_cell(&occupied, 2, &mut rng).unwrap();
        assert_ne!(pos, Cell::new(0, 0));
    }
}
