//! Tetris core - pure game rules with no I/O dependencies.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod types;

pub use board::Board;
pub use game::Game;
pub use piece::{Piece, Shape};
pub use types::{Cell, Command, PieceKind};
