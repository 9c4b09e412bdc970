//! Core Tetris types and constants.
//!
//! Pure data with no external dependencies.

/// Board dimensions (rows top to bottom, columns left to right).
pub const BOARD_ROWS: u8 = 20;
pub const BOARD_COLS: u8 = 10;

/// Frame tick length in milliseconds.
pub const TICK_MS: u32 = 16;

/// Gravity intervals in milliseconds.
pub const NORMAL_FALL_MS: u32 = 500;
pub const SOFT_DROP_FALL_MS: u32 = 50;

/// How long soft drop stays latched after the last down-key event.
///
/// Most terminals never deliver key release events; auto-repeat presses
/// keep refreshing this window while the key is held.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Score awarded per cleared line.
pub const SCORE_PER_LINE: u32 = 100;

/// The seven tetromino kinds.
///
/// Order matches the canonical shape table, so `color_id` is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    Z,
    S,
    I,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
    ];

    /// 1-based color identifier stored in settled board cells.
    pub fn color_id(self) -> u8 {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::Z => 3,
            PieceKind::S => 4,
            PieceKind::I => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`color_id`](Self::color_id). 0 means an empty cell.
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::T),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::Z),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::I),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Cell on the board (None = empty, Some = settled piece kind).
pub type Cell = Option<PieceKind>;

/// Discrete input commands accepted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDropOn,
    SoftDropOff,
}
