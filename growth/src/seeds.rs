// seeds.rs - Starting patterns for the growth grid

use rand::Rng;

use crate::grid::{Cell, GRID_SIZE, Grid};

const LAST: usize = GRID_SIZE - 1;
const MID: usize = GRID_SIZE / 2;

pub struct Seed {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

// Diagonal and Ring coordinates are laid out for the default 100x100 grid
pub const SEEDS: &[Seed] = &[
    Seed {
        name: "Single",
        cells: &[(MID, MID)],
    },
    Seed {
        name: "Plus",
        cells: &[(MID - 1, MID), (MID, MID - 1), (MID, MID), (MID, MID + 1), (MID + 1, MID)],
    },
    Seed {
        name: "Corners",
        cells: &[(0, 0), (0, LAST), (LAST, 0), (LAST, LAST)],
    },
    Seed {
        name: "Diagonal",
        cells: &[
            (5, 5), (15, 15), (25, 25), (35, 35), (45, 45),
            (55, 55), (65, 65), (75, 75), (85, 85), (95, 95),
        ],
    },
    Seed {
        name: "Ring",
        cells: &[
            // Top and bottom edges
            (45, 45), (45, 46), (45, 47), (45, 48), (45, 49), (45, 50), (45, 51), (45, 52), (45, 53), (45, 54),
            (54, 45), (54, 46), (54, 47), (54, 48), (54, 49), (54, 50), (54, 51), (54, 52), (54, 53), (54, 54),
            // Left and right edges
            (46, 45), (47, 45), (48, 45), (49, 45), (50, 45), (51, 45), (52, 45), (53, 45),
            (46, 54), (47, 54), (48, 54), (49, 54), (50, 54), (51, 54), (52, 54), (53, 54),
        ],
    },
];

pub fn apply_seed(grid: &mut Grid, seed: &Seed) {
    // Clear grid first
    *grid = Grid::new(grid.size());

    // Cells outside the grid are skipped by `set`
    for &(row, col) in seed.cells {
        grid.set(row, col, Cell::SPROUT);
    }
}

/// Clear the grid, then occupy each cell independently with probability
/// `density`.
pub fn scatter<R: Rng>(grid: &mut Grid, rng: &mut R, density: f64) {
    let size = grid.size();
    *grid = Grid::new(size);

    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    for row in 0..size {
        for col in 0..size {
            if rng.random_bool(density) {
                grid.set(row, col, Cell::SPROUT);
            }
        }
    }
}
