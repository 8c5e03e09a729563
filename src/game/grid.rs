//! Square grid geometry: cell units for the simulation, pixels for renderers.

use super::types::Cell;

/// Fixed-size square grid.
///
/// All simulation arithmetic happens in cell units. Pixel coordinates are
/// only produced on demand for a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_count: i16,
    cell_size_px: u32,
}

impl Grid {
    /// Grid for a board of `board_size_px` split into cells of `cell_size_px`.
    /// The cell count is clamped to at least one.
    pub fn new(board_size_px: u32, cell_size_px: u32) -> Self {
        let cell_size_px = cell_size_px.max(1);
        let cell_count = (board_size_px / cell_size_px).clamp(1, i16::MAX as u32) as i16;
        Self {
            cell_count,
            cell_size_px,
        }
    }

    pub fn with_cell_count(cell_count: i16, cell_size_px: u32) -> Self {
        Self {
            cell_count: cell_count.max(1),
            cell_size_px: cell_size_px.max(1),
        }
    }

    /// Cells per side.
    pub fn cell_count(&self) -> i16 {
        self.cell_count
    }

    pub fn cell_size_px(&self) -> u32 {
        self.cell_size_px
    }

    pub fn board_size_px(&self) -> u32 {
        self.cell_count as u32 * self.cell_size_px
    }

    pub fn total_cells(&self) -> usize {
        self.cell_count as usize * self.cell_count as usize
    }

    /// True if `cell` lies in `[0, cell_count)` on both axes.
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cell_count).contains(&cell.x) && (0..self.cell_count).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.cell_count / 2, self.cell_count / 2)
    }

    /// Top-left pixel of `cell`.
    pub fn cell_to_pixel(&self, cell: Cell) -> (i32, i32) {
        let size = self.cell_size_px as i32;
        (cell.x as i32 * size, cell.y as i32 * size)
    }

    /// Cell under a pixel, or `None` if the pixel is off the board.
    pub fn pixel_to_cell(&self, px: i32, py: i32) -> Option<Cell> {
        if px < 0 || py < 0 {
            return None;
        }
        let size = self.cell_size_px as i32;
        let cell = Cell::new((px / size) as i16, (py / size) as i16);
        self.contains(cell).then_some(cell)
    }

    /// Same grid re-scaled so the whole board fits in `available_px`.
    pub fn fit_to(&self, available_px: u32) -> Self {
        Self::with_cell_count(self.cell_count, available_px / self.cell_count as u32)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count).flat_map(move |y| (0..self.cell_count).map(move |x| Cell::new(x, y)))
    }
}
