//! Interactive Life session: grid plus autoplay/speed controls.
//!
//! The simulation rate is decoupled from the frame rate. The session keeps
//! its own millisecond accumulator (the same pattern as Tetris gravity) and
//! advances one generation each time it crosses `1000 / speed` ms, so input
//! stays responsive even at 1 generation per second.

use crate::life::grid::LifeGrid;

/// Generations-per-second bounds.
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 60;

/// Default speed matching the interactive editor's startup state.
pub const DEFAULT_SPEED: u32 = 5;

/// Discrete input commands accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeCommand {
    /// Flip the cell at (row, col). Coordinates outside the grid are
    /// ignored.
    ToggleCell(usize, usize),
    ToggleAutoplay,
    SpeedUp,
    SpeedDown,
}

/// One editing/simulation session.
#[derive(Debug, Clone)]
pub struct LifeSession {
    grid: LifeGrid,
    autoplay: bool,
    /// Generations per second, clamped to [MIN_SPEED, MAX_SPEED].
    speed: u32,
    step_timer_ms: u32,
    generation: u64,
}

impl LifeSession {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: LifeGrid::new(rows, cols),
            autoplay: false,
            speed: DEFAULT_SPEED,
            step_timer_ms: 0,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.grid
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Milliseconds between generations at the current speed.
    fn step_interval_ms(&self) -> u32 {
        1000 / self.speed
    }

    /// Apply a discrete input command.
    pub fn handle_command(&mut self, cmd: LifeCommand) {
        match cmd {
            LifeCommand::ToggleCell(row, col) => {
                if self.grid.get(row, col).is_some() {
                    self.grid.toggle(row, col);
                }
            }
            LifeCommand::ToggleAutoplay => self.autoplay = !self.autoplay,
            LifeCommand::SpeedUp => self.speed = (self.speed + 1).min(MAX_SPEED),
            LifeCommand::SpeedDown => self.speed = self.speed.saturating_sub(1).max(MIN_SPEED),
        }
    }

    /// Advance simulated time; steps the grid while autoplay is on.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.autoplay {
            self.step_timer_ms = 0;
            return;
        }
        self.step_timer_ms += elapsed_ms;
        while self.step_timer_ms >= self.step_interval_ms() {
            self.step_timer_ms -= self.step_interval_ms();
            self.grid.step();
            self.generation += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_clamps_at_both_ends() {
        let mut session = LifeSession::new(10, 10);
        for _ in 0..100 {
            session.handle_command(LifeCommand::SpeedUp);
        }
        assert_eq!(session.speed(), MAX_SPEED);
        for _ in 0..100 {
            session.handle_command(LifeCommand::SpeedDown);
        }
        assert_eq!(session.speed(), MIN_SPEED);
    }

    #[test]
    fn tick_is_inert_without_autoplay() {
        let mut session = LifeSession::new(5, 5);
        session.handle_command(LifeCommand::ToggleCell(2, 2));
        session.tick(10_000);
        assert_eq!(session.generation(), 0);
        assert!(session.grid().is_alive(2, 2));
    }

    #[test]
    fn autoplay_steps_on_the_interval() {
        let mut session = LifeSession::new(5, 5);
        session.handle_command(LifeCommand::ToggleAutoplay);
        assert!(session.autoplay());

        // Default 5 gen/s: 200ms per generation.
        session.tick(199);
        assert_eq!(session.generation(), 0);
        session.tick(1);
        assert_eq!(session.generation(), 1);
        session.tick(600);
        assert_eq!(session.generation(), 4);
    }

    #[test]
    fn toggle_cell_out_of_grid_is_a_no_op() {
        let mut session = LifeSession::new(5, 5);
        session.handle_command(LifeCommand::ToggleCell(99, 99));
        assert_eq!(session.generation(), 0);
    }
}
