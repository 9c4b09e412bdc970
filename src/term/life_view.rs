//! LifeView: maps a `LifeSession` into a terminal framebuffer.
//!
//! Also provides the inverse mapping from terminal coordinates back to grid
//! cells so the event loop can translate mouse clicks.

use crate::life::{LifeGrid, LifeSession};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb, Viewport};
use crate::term::tetris_view::{draw_border, draw_overlay_text};

/// Renders the cell grid, a border, and a status line.
pub struct LifeView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl LifeView {
    /// Top-left corner of the bordered frame for a given grid and viewport.
    fn frame_origin(&self, grid: &LifeGrid, viewport: Viewport) -> (u16, u16) {
        let frame_w = (grid.cols() as u16) * self.cell_w + 2;
        let frame_h = grid.rows() as u16 + 2;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        (x, y)
    }

    /// Render the session into an existing framebuffer.
    pub fn render_into(&self, session: &LifeSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.fit(viewport);

        let grid = session.grid();
        let (start_x, start_y) = self.frame_origin(grid, viewport);
        let frame_w = (grid.cols() as u16) * self.cell_w + 2;
        let frame_h = grid.rows() as u16 + 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h, CellStyle::default());

        let alive = CellStyle::colored(Rgb::new(120, 230, 120), Rgb::new(0, 0, 0));
        let dead = CellStyle::colored(Rgb::new(50, 50, 60), Rgb::new(0, 0, 0));

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let (ch, style) = if grid.is_alive(row, col) {
                    ('█', alive)
                } else {
                    ('·', dead)
                };
                let px = start_x + 1 + (col as u16) * self.cell_w;
                let py = start_y + 1 + row as u16;
                fb.fill_rect(px, py, self.cell_w, 1, ch, style);
            }
        }

        self.draw_status_line(fb, session, start_x, start_y + frame_h);

        if !session.autoplay() {
            draw_overlay_text(fb, start_x, start_y, frame_w, 0, "EDIT");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &LifeSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    /// Map a terminal position to the grid cell underneath it, if any.
    ///
    /// Inverse of the layout used by [`render_into`](Self::render_into);
    /// positions on the border or outside the frame return None.
    pub fn cell_at(
        &self,
        grid: &LifeGrid,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<(usize, usize)> {
        let (start_x, start_y) = self.frame_origin(grid, viewport);
        let inner_x = x.checked_sub(start_x + 1)?;
        let inner_y = y.checked_sub(start_y + 1)?;

        let row = inner_y as usize;
        let col = (inner_x / self.cell_w) as usize;
        (row < grid.rows() && col < grid.cols()).then_some((row, col))
    }

    fn draw_status_line(&self, fb: &mut FrameBuffer, session: &LifeSession, x: u16, y: u16) {
        let style = CellStyle::default();
        let status = format!(
            "{}  speed {:>2}/s  gen {}",
            if session.autoplay() { "RUN " } else { "STOP" },
            session.speed(),
            session.generation()
        );
        fb.put_str(x, y, &status, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_marks_alive_cells() {
        let mut session = LifeSession::new(5, 5);
        session.handle_command(crate::life::LifeCommand::ToggleCell(2, 2));

        let view = LifeView::default();
        let viewport = Viewport::new(40, 20);
        let fb = view.render(&session, viewport);

        let blocks = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.get(x, y).unwrap().ch == '█')
            .count();
        // One alive cell, two terminal columns wide.
        assert_eq!(blocks, 2);
    }

    #[test]
    fn cell_at_inverts_the_layout() {
        let session = LifeSession::new(10, 10);
        let view = LifeView::default();
        let viewport = Viewport::new(80, 24);
        let grid = session.grid();

        let (start_x, start_y) = view.frame_origin(grid, viewport);

        // First cell, both terminal columns of it.
        assert_eq!(
            view.cell_at(grid, viewport, start_x + 1, start_y + 1),
            Some((0, 0))
        );
        assert_eq!(
            view.cell_at(grid, viewport, start_x + 2, start_y + 1),
            Some((0, 0))
        );
        // Second column of cells.
        assert_eq!(
            view.cell_at(grid, viewport, start_x + 3, start_y + 1),
            Some((0, 1))
        );
        // The border is not a cell.
        assert_eq!(view.cell_at(grid, viewport, start_x, start_y + 1), None);
        // Outside the frame entirely.
        assert_eq!(view.cell_at(grid, viewport, 0, 0), None);
    }
}
