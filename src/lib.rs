//! Two self-contained terminal grid games sharing one rendering substrate.
//!
//! - [`tetris`]: board/piece state machine with timed gravity.
//! - [`life`]: Conway's Game of Life editor and simulator.
//! - [`term`]: framebuffer views plus the crossterm flusher.
//! - [`input`]: key/mouse to command mapping.
//!
//! The game cores are pure and single-threaded; the binaries own pacing and
//! terminal I/O.

pub mod input;
pub mod life;
pub mod term;
pub mod tetris;
