//! Shapes and the active falling piece.
//!
//! A `Shape` is a small rows×cols boolean matrix describing which cells of a
//! piece's bounding box are filled. Rotation produces a new matrix and may
//! swap the bounding-box dimensions; four rotations in the same direction
//! return the original shape.

use arrayvec::ArrayVec;

use crate::tetris::types::{PieceKind, BOARD_COLS};

/// Maximum shape matrix size (the I piece is 1×4, nothing exceeds 4×4).
const MAX_SHAPE_CELLS: usize = 16;

/// Rectangular boolean matrix of a piece's filled cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let cols = rows[0].len() as u8;
        debug_assert!(rows.iter().all(|r| r.len() == cols as usize));

        let mut cells = ArrayVec::new();
        for row in rows {
            for &v in *row {
                cells.push(v != 0);
            }
        }
        Self {
            rows: rows.len() as u8,
            cols,
            cells,
        }
    }

    /// Canonical spawn shape for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        let rows: &[&[u8]] = match kind {
            PieceKind::T => &[&[1, 1, 1], &[0, 1, 0]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
            PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
        };
        Self::from_rows(rows)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) of the bounding box is filled.
    ///
    /// Coordinates must lie within the bounding box.
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[(row as usize) * (self.cols as usize) + (col as usize)]
    }

    /// Iterate the (row, col) offsets of all filled cells.
    pub fn filled_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &filled)| filled)
            .map(move |(i, _)| ((i / cols as usize) as u8, (i % cols as usize) as u8))
    }

    /// 90° clockwise rotation: new[r][c] = old[rows-1-c][r].
    pub fn rotated_cw(&self) -> Self {
        let mut cells = ArrayVec::new();
        for r in 0..self.cols {
            for c in 0..self.rows {
                cells.push(self.is_filled(self.rows - 1 - c, r));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// 90° counter-clockwise rotation: new[r][c] = old[c][cols-1-r].
    ///
    /// Exact inverse of [`rotated_cw`](Self::rotated_cw); used to revert a
    /// rotation that collides instead of rotating three more times.
    pub fn rotated_ccw(&self) -> Self {
        let mut cells = ArrayVec::new();
        for r in 0..self.cols {
            for c in 0..self.rows {
                cells.push(self.is_filled(c, self.cols - 1 - r));
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// The active falling piece: a shape instance anchored on the board.
///
/// The anchor is the shape's top-left corner in board coordinates. The row
/// can be negative right after spawn, so the piece drops into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    row: i8,
    col: i8,
}

impl Piece {
    /// Create a piece at its spawn anchor: horizontally centered, vertically
    /// placed so roughly half the shape starts above row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::canonical(kind);
        // floor(-rows / 2): -1 for 1- and 2-row shapes.
        let row = -((shape.rows() as i8 + 1) / 2);
        // Half-width centering: odd-width shapes land one column right of
        // the exact center, so every 3-wide piece starts at column 4.
        let col = (BOARD_COLS / 2 - shape.cols() / 2) as i8;
        Self {
            kind,
            shape,
            row,
            col,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    /// Shift the anchor by the given deltas.
    pub fn shift(&mut self, drow: i8, dcol: i8) {
        self.row += drow;
        self.col += dcol;
    }

    pub fn rotate_cw(&mut self) {
        self.shape = self.shape.rotated_cw();
    }

    pub fn rotate_ccw(&mut self) {
        self.shape = self.shape.rotated_ccw();
    }

    /// Iterate the board coordinates of all filled cells, offset applied.
    pub fn filled_board_cells(&self, drow: i8, dcol: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        let row = self.row + drow;
        let col = self.col + dcol;
        self.shape
            .filled_cells()
            .map(move |(r, c)| (row + r as i8, col + c as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_shapes_have_four_filled_cells() {
        for kind in PieceKind::ALL {
            let shape = Shape::canonical(kind);
            assert_eq!(shape.filled_cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn rotation_swaps_bounding_box() {
        let shape = Shape::canonical(PieceKind::I);
        assert_eq!((shape.rows(), shape.cols()), (1, 4));

        let rotated = shape.rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
    }

    #[test]
    fn four_cw_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = Shape::canonical(kind);
            let back = shape
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(back, shape, "{kind:?}");
        }
    }

    #[test]
    fn ccw_inverts_cw() {
        for kind in PieceKind::ALL {
            let shape = Shape::canonical(kind);
            assert_eq!(shape.rotated_cw().rotated_ccw(), shape, "{kind:?}");
            assert_eq!(shape.rotated_ccw().rotated_cw(), shape, "{kind:?}");
        }
    }

    #[test]
    fn cw_rotation_moves_top_left_to_top_right() {
        // 2×2 matrix with a single filled corner makes the direction visible.
        let shape = Shape::from_rows(&[&[1, 0], &[0, 0]]);
        let rotated = shape.rotated_cw();
        assert!(rotated.is_filled(0, 1));
        assert_eq!(rotated.filled_cells().count(), 1);
    }

    #[test]
    fn spawn_anchor_is_centered_and_above_board() {
        // 2-row shapes spawn at row -1.
        let t = Piece::spawn(PieceKind::T);
        assert_eq!(t.row(), -1);
        assert_eq!(t.col(), 4); // 10/2 - 3/2

        // The 1-row I piece also starts above the board.
        let i = Piece::spawn(PieceKind::I);
        assert_eq!(i.row(), -1);
        assert_eq!(i.col(), 3); // 10/2 - 4/2
    }

    #[test]
    fn filled_board_cells_applies_anchor_and_offset() {
        let piece = Piece::spawn(PieceKind::O);
        let cells: Vec<_> = piece.filled_board_cells(1, 0).collect();
        assert_eq!(cells, vec![(0, 4), (0, 5), (1, 4), (1, 5)]);
    }
}
