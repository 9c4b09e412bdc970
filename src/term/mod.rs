//! Terminal rendering layer.
//!
//! Pure view code maps game state into a [`FrameBuffer`]; the
//! [`TerminalRenderer`] is the only part that touches the terminal. The
//! views are unit-testable without any I/O.

pub mod fb;
pub mod life_view;
pub mod renderer;
pub mod tetris_view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, Viewport};
pub use life_view::LifeView;
pub use renderer::TerminalRenderer;
pub use tetris_view::TetrisView;
