//! Game of Life core - pure grid rules plus the interactive session state.

pub mod grid;
pub mod session;

pub use grid::LifeGrid;
pub use session::{LifeCommand, LifeSession};
