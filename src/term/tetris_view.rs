//! TetrisView: maps a `Game` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::term::fb::{CellStyle, FrameBuffer, Rgb, Viewport};
use crate::tetris::types::{PieceKind, BOARD_COLS, BOARD_ROWS};
use crate::tetris::Game;

/// Renders the play field, the active piece, the score panel, and the
/// game-over overlay.
pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for TetrisView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl TetrisView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only
    /// when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.fit(viewport);

        let field_w = (BOARD_COLS as u16) * self.cell_w;
        let field_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field_bg = CellStyle::colored(Rgb::new(80, 80, 90), Rgb::new(25, 25, 32));
        let border = CellStyle::default();

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field_bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for row in 0..BOARD_ROWS as i8 {
            for col in 0..BOARD_COLS as i8 {
                if let Some(Some(kind)) = game.board().get(row, col) {
                    self.fill_board_cell(fb, start_x, start_y, row as u16, col as u16, kind);
                }
            }
        }

        // Active piece. Cells above the top edge are simply not drawn.
        if let Some(piece) = game.piece() {
            for (row, col) in piece.filled_board_cells(0, 0) {
                if row >= 0 && row < BOARD_ROWS as i8 && col >= 0 && col < BOARD_COLS as i8 {
                    self.fill_board_cell(fb, start_x, start_y, row as u16, col as u16, piece.kind());
                }
            }
        }

        self.draw_score_panel(fb, game, viewport, start_x, start_y, frame_w);

        if game.game_over() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(25, 25, 32),
            bold: true,
        };
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_score_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_str(panel_x, start_y + 1, &game.score().to_string(), value);
    }
}

/// Colors from the canonical shape table, indexed by `color_id`.
fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::T => Rgb::new(255, 0, 0),
        PieceKind::O => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(0, 0, 255),
        PieceKind::S => Rgb::new(255, 255, 0),
        PieceKind::I => Rgb::new(255, 0, 255),
        PieceKind::J => Rgb::new(0, 255, 255),
        PieceKind::L => Rgb::new(128, 0, 128),
    }
}

pub(crate) fn draw_border(
    fb: &mut FrameBuffer,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: CellStyle,
) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

pub(crate) fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    };
    fb.put_str(x, mid_y, text, style);
}
