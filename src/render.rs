use crate::grid::Grid;

/// Glyphs are two characters wide so cells line up under the border blocks.
const ALIVE: &str = "0 ";
const DEAD: &str = "  ";
const BORDER: &str = "- ";

/// Formats generations of a [`Grid`] for the terminal.
pub struct Frame {
    /// The frame buffer. Reused across generations.
    fb: String,
}

impl Frame {
    pub fn new(grid: &Grid) -> Self {
        // Each grid row is `2 * w` bytes plus a newline, and the border rows
        // above and below the grid have the same shape. This gives us a
        // framebuffer of length `(h + 2) * (2 * w + 1)`.

        let (w, h) = (grid.width(), grid.height());
        let fb = String::with_capacity((h + 2) * (2 * w + 1));

        Self { fb }
    }

    /// Render one generation into the frame buffer: a border line of `"- "`
    /// repeated `width` times, one line per row with `"0 "` per live cell
    /// and `"  "` per dead cell, and the bottom border.
    pub fn render(&mut self, grid: &Grid) -> &str {
        self.fb.clear();

        self.push_border(grid.width());

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let glyph = if grid.is_alive(row, col) { ALIVE } else { DEAD };

                self.fb.push_str(glyph);
            }

            self.fb.push('\n');
        }

        self.push_border(grid.width());

        &self.fb
    }

    fn push_border(&mut self, w: usize) {
        for _ in 0..w {
            self.fb.push_str(BORDER);
        }

        self.fb.push('\n');
    }
}
