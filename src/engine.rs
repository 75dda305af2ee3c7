use crate::grid::Grid;

/// An alive cell with this many live neighbors or fewer dies of isolation.
pub const STARVATION_MAX: u8 = 1;

/// An alive cell with this many live neighbors or more dies of overcrowding.
pub const OVERCROWDING_MIN: u8 = 4;

/// A dead cell with exactly this many live neighbors becomes alive.
pub const BIRTH_NEIGHBORS: u8 = 3;

/// The transition rule for a single cell, given its current state and live
/// neighbor count.
pub fn next_state(alive: bool, alive_neighbors: u8) -> bool {
    if alive && (alive_neighbors <= STARVATION_MAX || alive_neighbors >= OVERCROWDING_MIN) {
        false
    } else if !alive && alive_neighbors == BIRTH_NEIGHBORS {
        true
    } else {
        alive
    }
}

/// Advance `grid` to its next generation, in place.
///
/// Two strictly ordered passes. Pass 1 stages every cell's next state from
/// the current generation; nothing is committed yet, so no cell observes a
/// neighbor that has already flipped. Pass 2 recounts each cell's neighbors
/// against the staged states, then commits them.
///
/// When this returns, every cell's `alive` is the new generation and its
/// `alive_neighbors` counts live neighbors within that new generation, ready
/// for the next call.
pub fn advance(grid: &mut Grid) {
    for cell in grid.cells.iter_mut() {
        cell.alive_next = next_state(cell.alive, cell.alive_neighbors);
    }

    for i in 0..grid.cells.len() {
        let (row, col) = grid.pos(i);
        let n = grid.count_neighbors(row, col, |c| c.alive_next);

        let cell = &mut grid.cells[i];
        cell.alive_neighbors = n;
        cell.alive = cell.alive_next;
    }
}
