//! The Game of Life grid model.
//!
//! A rectangular boolean grid with fixed dimensions. Each `step` computes
//! the next generation from a snapshot of the current one (double-buffered,
//! never in place) so no cell observes another cell's new value mid-scan.
//! The boundary is hard: out-of-bounds neighbors contribute nothing, a
//! corner cell has at most 3 neighbors.

/// Rows×cols grid of dead/alive cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl LifeGrid {
    /// Create a grid with all cells dead. Dimensions are fixed for the
    /// lifetime of the model.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Cell state at (row, col), or None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Whether the cell at (row, col) is alive.
    ///
    /// Panics on out-of-range coordinates; passing them is a caller bug.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.out_of_range_panic(row, col)]
    }

    /// Flip one cell, for manual editing between steps.
    ///
    /// Panics on out-of-range coordinates; passing them is a caller bug.
    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.out_of_range_panic(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    /// Set one cell directly (used for seeding patterns).
    ///
    /// Panics on out-of-range coordinates; passing them is a caller bug.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.out_of_range_panic(row, col);
        self.cells[idx] = alive;
    }

    fn out_of_range_panic(&self, row: usize, col: usize) -> usize {
        self.index(row, col).unwrap_or_else(|| {
            panic!(
                "cell ({row}, {col}) out of range for {}x{} grid",
                self.rows, self.cols
            )
        })
    }

    /// Count alive cells among the 8 in-bounds neighbors of (row, col).
    fn alive_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for drow in -1i32..=1 {
            for dcol in -1i32..=1 {
                if drow == 0 && dcol == 0 {
                    continue;
                }
                let nrow = row as i32 + drow;
                let ncol = col as i32 + dcol;
                if nrow < 0 || ncol < 0 {
                    continue;
                }
                if self.get(nrow as usize, ncol as usize) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advance one generation with the B3/S23 rule.
    ///
    /// A live cell survives with exactly 2 or 3 live neighbors; a dead cell
    /// is born with exactly 3. The new generation replaces the grid
    /// atomically.
    pub fn step(&mut self) {
        let mut next = vec![false; self.rows * self.cols];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neighbors = self.alive_neighbors(row, col);
                let alive = self.cells[row * self.cols + col];
                next[row * self.cols + col] = match (alive, neighbors) {
                    (true, 2 | 3) => true,
                    (false, 3) => true,
                    _ => false,
                };
            }
        }
        self.cells = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = LifeGrid::new(4, 6);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        for row in 0..4 {
            for col in 0..6 {
                assert!(!grid.is_alive(row, col));
            }
        }
    }

    #[test]
    fn toggle_flips_state() {
        let mut grid = LifeGrid::new(3, 3);
        grid.toggle(1, 2);
        assert!(grid.is_alive(1, 2));
        grid.toggle(1, 2);
        assert!(!grid.is_alive(1, 2));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn toggle_out_of_range_panics() {
        let mut grid = LifeGrid::new(3, 3);
        grid.toggle(3, 0);
    }

    #[test]
    fn get_returns_none_out_of_bounds() {
        let grid = LifeGrid::new(3, 3);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(0, 0), Some(false));
    }

    #[test]
    fn corner_cell_counts_at_most_three_neighbors() {
        let mut grid = LifeGrid::new(3, 3);
        // Surround the corner with live cells everywhere in bounds.
        for row in 0..3 {
            for col in 0..3 {
                grid.set(row, col, true);
            }
        }
        assert_eq!(grid.alive_neighbors(0, 0), 3);
        assert_eq!(grid.alive_neighbors(2, 2), 3);
        assert_eq!(grid.alive_neighbors(1, 1), 8);
    }
}
