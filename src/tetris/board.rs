//! Board module - the settled-cell grid.
//!
//! The board is a 20x10 grid where each cell is empty or holds the kind of
//! the piece that settled there. Uses a flat array for cache locality.
//! Coordinates: (row, col) with row 0 at the top.
//!
//! The board has exactly two states: active and game-over. The game-over
//! latch is one-way; it is set when a piece settles with any filled cell
//! outside the grid (locked above the visible field) and never resets.

use crate::tetris::piece::Piece;
use crate::tetris::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// The settled-cell grid, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    game_over: bool,
}

impl Board {
    /// Create a new empty board in the active state.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            game_over: false,
        }
    }

    /// Flat index for (row, col), or None when out of bounds.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Cell at (row, col), or None when out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set a cell directly. Returns false when out of bounds.
    ///
    /// For seeding board states; gameplay mutation goes through `settle`.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the terminal game-over state has been reached.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The single collision predicate.
    ///
    /// True iff every filled cell of the piece, shifted by (drow, dcol), lies
    /// within board bounds and lands on an empty cell. Used for movement,
    /// rotation validation, and gravity alike.
    pub fn can_place(&self, piece: &Piece, drow: i8, dcol: i8) -> bool {
        piece
            .filled_board_cells(drow, dcol)
            .all(|(row, col)| matches!(self.get(row, col), Some(None)))
    }

    /// Permanently write the piece's filled cells into the grid.
    ///
    /// In-bounds cells always get the piece's kind. Any filled cell outside
    /// the grid means the piece locked above the visible field: the
    /// game-over latch is set, but the in-bounds writes still proceed.
    pub fn settle(&mut self, piece: &Piece) {
        for (row, col) in piece.filled_board_cells(0, 0) {
            match Self::index(row, col) {
                Some(idx) => self.cells[idx] = Some(piece.kind()),
                None => self.game_over = true,
            }
        }
    }

    /// Whether every cell of the row is occupied.
    pub fn is_line_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        let start = row * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove one row: every row above shifts down by one, row 0 empties.
    ///
    /// Cells below the cleared row are untouched.
    pub fn clear_line(&mut self, row: usize) {
        debug_assert!(row < BOARD_ROWS as usize);
        let cols = BOARD_COLS as usize;

        // copy_within handles the overlapping ranges safely.
        for r in (1..=row).rev() {
            let src = (r - 1) * cols;
            let dst = r * cols;
            self.cells.copy_within(src..src + cols, dst);
        }
        for cell in &mut self.cells[0..cols] {
            *cell = None;
        }
    }

    /// Clear every full row, scanning bottom to top, and return the count.
    ///
    /// After a clear the same row index is checked again: the row shifted
    /// into the slot may itself be full, and each simultaneous full line
    /// must be counted independently.
    pub fn clear_full_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = (BOARD_ROWS - 1) as usize;
        loop {
            if self.is_line_full(row) {
                self.clear_line(row);
                cleared += 1;
            } else if row == 0 {
                break;
            } else {
                row -= 1;
            }
        }
        cleared
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tetris::types::PieceKind;

    #[test]
    fn index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, -1), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(0, 10), None);
    }

    #[test]
    fn new_board_is_empty_and_active() {
        let board = Board::new();
        assert!(!board.game_over());
        for row in 0..BOARD_ROWS as i8 {
            for col in 0..BOARD_COLS as i8 {
                assert_eq!(board.get(row, col), Some(None));
            }
        }
    }

    #[test]
    fn settle_writes_piece_kind() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.shift(10, 0);

        board.settle(&piece);
        assert_eq!(board.get(9, 4), Some(Some(PieceKind::O)));
        assert_eq!(board.get(9, 5), Some(Some(PieceKind::O)));
        assert_eq!(board.get(10, 4), Some(Some(PieceKind::O)));
        assert_eq!(board.get(10, 5), Some(Some(PieceKind::O)));
        assert!(!board.game_over());
    }

    #[test]
    fn is_line_full_rejects_out_of_range_row() {
        let board = Board::new();
        assert!(!board.is_line_full(BOARD_ROWS as usize));
    }
}
