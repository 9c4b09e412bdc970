//! Styled character cells and the framebuffer the views draw into.

/// Terminal dimensions a frame is laid out against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn colored(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::colored(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Row-major grid of styled character cells.
///
/// Views draw with clipped writes (anything outside the buffer is dropped,
/// so they never guard against small terminals); the renderer reads the
/// result back one row slice at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Match the viewport and blank every cell, reusing the allocation.
    pub fn fit(&mut self, viewport: Viewport) {
        self.width = viewport.width;
        self.height = viewport.height;
        self.cells.clear();
        self.cells
            .resize(self.width as usize * self.height as usize, Cell::default());
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get_mut(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row of cells. `y` must be less than the buffer height.
    pub fn row(&self, y: u16) -> &[Cell] {
        let width = self.width as usize;
        let start = y as usize * width;
        &self.cells[start..start + width]
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(cell) = self.cell_mut(x, y) {
            *cell = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_char_and_get_roundtrip() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_char(3, 1, 'X', CellStyle::default());
        assert_eq!(fb.get(3, 1).unwrap().ch, 'X');
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(2, 0, 'X', CellStyle::default());
        fb.put_char(0, 2, 'X', CellStyle::default());
        assert!(fb.get(2, 0).is_none());
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(fb.get(x, y).unwrap().ch, ' ');
            }
        }
    }

    #[test]
    fn put_str_clips_at_the_right_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(1, 0, "abc", CellStyle::default());
        let row: String = fb.row(0).iter().map(|c| c.ch).collect();
        assert_eq!(row, " ab");
    }

    #[test]
    fn fit_resizes_and_blanks() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'X', CellStyle::default());

        fb.fit(Viewport::new(3, 1));
        assert_eq!((fb.width(), fb.height()), (3, 1));
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.row(0).len(), 3);
    }
}
