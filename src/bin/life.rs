//! Terminal Game of Life runner.
//!
//! Same frame loop shape as the Tetris binary, plus mouse capture: a left
//! click toggles the cell under the pointer. Space toggles autoplay, up and
//! down adjust the simulation speed, `q` quits.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::QueueableCommand;

use tui_arcade::input::{life_key_press, should_quit};
use tui_arcade::life::{LifeCommand, LifeSession};
use tui_arcade::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};

const GRID_ROWS: usize = 20;
const GRID_COLS: usize = 40;

/// Frame tick length in milliseconds.
const TICK_MS: u32 = 16;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;
    let mut stdout = std::io::stdout();
    stdout.queue(EnableMouseCapture)?;
    stdout.flush()?;

    let result = run(&mut term);

    let _ = stdout.queue(DisableMouseCapture);
    let _ = stdout.flush();
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = LifeSession::new(GRID_ROWS, GRID_COLS);
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&session, viewport, &mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = life_key_press(key.code) {
                        session.handle_command(cmd);
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some((row, col)) =
                            view.cell_at(session.grid(), viewport, mouse.column, mouse.row)
                        {
                            session.handle_command(LifeCommand::ToggleCell(row, col));
                        }
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
