//! Game session state machine.
//!
//! Owns the board and the active piece, applies gravity on a millisecond
//! accumulator, settles blocked pieces, clears full lines, accumulates
//! score, and latches the terminal game-over state.
//!
//! Expected-invalid actions (a move or rotation that would collide) are
//! rejected as no-ops, not errors; bounded movement is core game behavior.

use crate::tetris::board::Board;
use crate::tetris::piece::Piece;
use crate::tetris::rng::SimpleRng;
use crate::tetris::types::{
    Command, PieceKind, NORMAL_FALL_MS, SCORE_PER_LINE, SOFT_DROP_FALL_MS,
};

/// One play session: running until the board latches game over.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Some while the session is running, None once it is over.
    piece: Option<Piece>,
    rng: SimpleRng,
    fall_timer_ms: u32,
    soft_drop: bool,
    score: u32,
}

impl Game {
    /// Create a new session and spawn the first piece.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let piece = Some(Self::draw_piece(&mut rng));
        Self {
            board: Board::new(),
            piece,
            rng,
            fall_timer_ms: 0,
            soft_drop: false,
            score: 0,
        }
    }

    fn draw_piece(rng: &mut SimpleRng) -> Piece {
        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        Piece::spawn(kind)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active falling piece, None after game over.
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.board.game_over()
    }

    /// Current gravity interval in milliseconds.
    fn fall_interval_ms(&self) -> u32 {
        if self.soft_drop {
            SOFT_DROP_FALL_MS
        } else {
            NORMAL_FALL_MS
        }
    }

    /// Apply a discrete input command. Inert once the game is over.
    pub fn handle_command(&mut self, cmd: Command) {
        if self.game_over() {
            return;
        }
        match cmd {
            Command::MoveLeft => {
                self.try_shift(0, -1);
            }
            Command::MoveRight => {
                self.try_shift(0, 1);
            }
            Command::Rotate => {
                self.try_rotate();
            }
            Command::SoftDropOn => self.soft_drop = true,
            Command::SoftDropOff => self.soft_drop = false,
        }
    }

    /// Shift the active piece if the target cells are free.
    fn try_shift(&mut self, drow: i8, dcol: i8) -> bool {
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        if self.board.can_place(piece, drow, dcol) {
            piece.shift(drow, dcol);
            true
        } else {
            false
        }
    }

    /// Rotate the active piece clockwise, reverting on collision.
    ///
    /// No wall kicks: the rotation either fits in place or is undone with a
    /// single counter-clockwise rotation.
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.piece.as_mut() else {
            return false;
        };
        piece.rotate_cw();
        if self.board.can_place(piece, 0, 0) {
            true
        } else {
            piece.rotate_ccw();
            false
        }
    }

    /// Advance simulated time.
    ///
    /// Once the accumulator exceeds the active fall interval it resets and
    /// the piece descends one row; a blocked descent settles the piece,
    /// clears full lines, scores them, and spawns the next piece unless the
    /// board latched game over during the settle.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.game_over() || self.piece.is_none() {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        if self.fall_timer_ms <= self.fall_interval_ms() {
            return;
        }
        self.fall_timer_ms = 0;

        if !self.try_shift(1, 0) {
            self.settle_and_respawn();
        }
    }

    fn settle_and_respawn(&mut self) {
        let Some(piece) = self.piece.take() else {
            return;
        };

        self.board.settle(&piece);
        let cleared = self.board.clear_full_lines();
        self.score += cleared * SCORE_PER_LINE;

        // The next piece always starts at normal gravity.
        self.soft_drop = false;

        if !self.board.game_over() {
            self.piece = Some(Self::draw_piece(&mut self.rng));
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
