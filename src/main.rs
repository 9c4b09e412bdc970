//! Terminal Tetris runner (default binary).
//!
//! Frame loop: render, poll input until the next tick boundary, apply
//! commands in arrival order, advance simulated time by one tick. The loop
//! ends on a quit key or when the game reaches its terminal game-over
//! state; the final score is printed after the terminal is restored.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_arcade::input::{should_quit, tetris_key_press, tetris_key_release};
use tui_arcade::term::{FrameBuffer, TerminalRenderer, TetrisView, Viewport};
use tui_arcade::tetris::types::{SOFT_DROP_GRACE_MS, TICK_MS};
use tui_arcade::tetris::{Command, Game};

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(score) => {
            println!("Game over! Final score: {score}");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<u32> {
    let mut game = Game::new(seed);
    let view = TetrisView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    // Soft drop is released either by a real release event or when this
    // grace window runs out. Terminals without release events still send
    // auto-repeat presses, which keep refreshing the window while the key
    // is held.
    let mut soft_drop_left_ms: i32 = 0;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if game.game_over() {
            return Ok(game.score());
        }

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(game.score());
                        }
                        if let Some(cmd) = tetris_key_press(key.code) {
                            if cmd == Command::SoftDropOn {
                                soft_drop_left_ms = SOFT_DROP_GRACE_MS as i32;
                            }
                            game.handle_command(cmd);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(cmd) = tetris_key_release(key.code) {
                            soft_drop_left_ms = 0;
                            game.handle_command(cmd);
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if soft_drop_left_ms > 0 {
                soft_drop_left_ms -= TICK_MS as i32;
                if soft_drop_left_ms <= 0 {
                    game.handle_command(Command::SoftDropOff);
                }
            }

            game.tick(TICK_MS);
        }
    }
}
