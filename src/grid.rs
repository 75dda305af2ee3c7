use crate::parse_seed::DEAD_MARKER;
use crate::parse_seed::Seed;

/// A single cell of the grid.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Cell {
    /// Current state.
    pub alive: bool,

    /// Staged state for the upcoming generation. The whole grid must flip at
    /// once, so the next state is buffered here until every cell has been
    /// decided.
    pub alive_next: bool,

    /// Count of currently-alive neighbors, out of the up to 8 in-bounds
    /// cells around this one.
    pub alive_neighbors: u8,
}

/// A fixed-size `h × w` grid of [`Cell`]s, stored row-major.
///
/// Dimensions are set at construction and never change. Neighbor lookups
/// past the border are excluded from counts; there is no wraparound.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Grid {
    /// The cell buffer
    pub(crate) cells: Vec<Cell>,

    /// Width of the grid, in cells
    w: usize,

    /// Height of the grid, in cells
    h: usize,
}

impl Grid {
    /// Build a grid from a parsed seed. A token equal to the dead marker is a
    /// dead cell, anything else is alive. Neighbor counts are computed
    /// up-front so the grid is immediately ready to advance.
    ///
    /// An empty seed yields a 0x0 grid.
    pub fn from_seed(seed: &Seed) -> Self {
        let h = seed.rows.len();
        let w = seed.rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(w * h);
        for row in &seed.rows {
            for token in row {
                cells.push(Cell {
                    alive: *token != DEAD_MARKER,
                    alive_next: false,
                    alive_neighbors: 0,
                });
            }
        }

        let mut grid = Self { cells, w, h };

        for i in 0..grid.cells.len() {
            let (row, col) = grid.pos(i);
            grid.cells[i].alive_neighbors = grid.count_neighbors(row, col, |c| c.alive);
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)].alive
    }

    /// The cached live-neighbor count of the cell at `(row, col)`.
    pub fn alive_neighbors(&self, row: usize, col: usize) -> u8 {
        self.cells[self.index(row, col)].alive_neighbors
    }

    /// Total count of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Count the neighbors of `(row, col)` for which `is_on` holds. The cell
    /// itself and out-of-bounds positions are excluded.
    ///
    /// See: https://conwaylife.com/wiki/Moore_neighbourhood
    pub(crate) fn count_neighbors<F>(&self, row: usize, col: usize, is_on: F) -> u8
    where
        F: Fn(&Cell) -> bool,
    {
        let mut n = 0;

        for di in -1isize..=1 {
            for dj in -1isize..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }

                let r = row as isize + di;
                let c = col as isize + dj;

                if r < 0 || c < 0 || r >= self.h as isize || c >= self.w as isize {
                    continue;
                }

                if is_on(&self.cells[self.index(r as usize, c as usize)]) {
                    n += 1;
                }
            }
        }

        n
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.w + col
    }

    pub(crate) fn pos(&self, i: usize) -> (usize, usize) {
        (i / self.w, i % self.w)
    }
}
