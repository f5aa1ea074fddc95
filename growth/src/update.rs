// update.rs - Growth and aging rule

use rand::Rng;

use crate::grid::{Cell, Grid};

/// A spread happens when the draw in `[0, 1)` exceeds this value.
pub const SPREAD_THRESHOLD: f64 = 0.2;

/// Occupied cells older than this clear on the next update.
pub const MAX_AGE: u32 = 5;

/// How neighbour lookups see spreads made earlier in the same pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Lookups read the input grid; scan order is not observable.
    #[default]
    Snapshot,
    /// Row-major scan over a working copy that spreads write into. A spread
    /// into a position not yet visited is itself processed later in the
    /// pass; a spread into a visited position does not reach the output.
    InPlace,
}

/// Compute the next generation of `grid`. The input is left untouched.
pub fn update_grid<R: Rng>(grid: &Grid, rng: &mut R, mode: ScanMode) -> Grid {
    match mode {
        ScanMode::Snapshot => update_snapshot(grid, rng),
        ScanMode::InPlace => update_in_place(grid, rng),
    }
}

/// Aging step for a cell that is occupied at the time it is visited.
pub fn aged(cell: Cell) -> Cell {
    if cell.age > MAX_AGE {
        Cell::EMPTY
    } else {
        Cell {
            occupied: true,
            age: cell.age.saturating_add(1),
        }
    }
}

/// Pick the spread target for an occupied cell, if the draw succeeds.
fn spread_target<R: Rng>(candidates: &[(usize, usize)], rng: &mut R) -> Option<(usize, usize)> {
    if candidates.is_empty() || rng.random::<f64>() <= SPREAD_THRESHOLD {
        return None;
    }
    candidates.get(rng.random_range(0..candidates.len())).copied()
}

fn update_snapshot<R: Rng>(grid: &Grid, rng: &mut R) -> Grid {
    let mut next = grid.clone();
    for ((row, col), cell) in grid.cells() {
        if !cell.occupied {
            continue;
        }
        if let Some((nr, nc)) = spread_target(&grid.neighbors(row, col), rng) {
            next.set(nr, nc, Cell::SPROUT);
        }
        next.set(row, col, aged(cell));
    }
    next
}

fn update_in_place<R: Rng>(grid: &Grid, rng: &mut R) -> Grid {
    let mut working = grid.clone();
    let size = grid.size();
    let mut rows = Vec::with_capacity(size);
    for row in 0..size {
        let mut next_row = Vec::with_capacity(size);
        for col in 0..size {
            let cell = working.get(row, col).unwrap_or_default();
            if !cell.occupied {
                next_row.push(cell);
                continue;
            }
            if let Some((nr, nc)) = spread_target(&working.neighbors(row, col), rng) {
                working.set(nr, nc, Cell::SPROUT);
            }
            next_row.push(aged(cell));
        }
        rows.push(next_row);
    }
    Grid::from_rows(rows)
}
