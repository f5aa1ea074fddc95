// grid.rs - Grid types for the growth simulation

// Compile-time grid size configuration
pub const GRID_SIZE: usize = 100;                     // Playing area is GRID_SIZE x GRID_SIZE

/// Offsets checked by [`Grid::neighbors`], in order.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Intensity lost per tick of age when rendering.
const FADE_PER_AGE: u32 = 40;

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub occupied: bool,
    pub age: u32,
}

impl Cell {
    pub const EMPTY: Cell = Cell { occupied: false, age: 0 };
    pub const SPROUT: Cell = Cell { occupied: true, age: 0 };

    /// Green channel used by the display; fades as the cell ages.
    pub fn intensity(&self) -> u8 {
        if !self.occupied {
            return 0;
        }
        let faded = self.age.saturating_mul(FADE_PER_AGE).min(255);
        // faded <= 255, so the difference always fits
        u8::try_from(255 - faded).unwrap_or(0)
    }
}

/// Square grid of cells, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// Create a `GRID_SIZE` x `GRID_SIZE` grid with every cell empty.
pub fn create_empty_grid() -> Grid {
    Grid::new(GRID_SIZE)
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            rows: vec![vec![Cell::EMPTY; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Replace the cell at `(row, col)`. Returns false if out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every position with its cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| ((row, col), *cell))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.occupied).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }

    /// Orthogonal neighbours of `(row, col)` that are inside the grid and
    /// not occupied.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = row.checked_add_signed(dr)?;
                let nc = col.checked_add_signed(dc)?;
                let cell = self.get(nr, nc)?;
                (!cell.occupied).then_some((nr, nc))
            })
            .collect()
    }

    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }
}
