// simulation.rs - Owned simulation state: grid, running flag, interval and generation

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::{MIN_INTERVAL_MS, SimulationConfig};
use crate::error::SimulationError;
use crate::grid::{Cell, Grid, create_empty_grid};
use crate::seeds::{self, Seed};
use crate::update::{ScanMode, update_grid};

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub generation: u64,
    pub occupied: usize,
}

#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    running: bool,
    interval: Duration,
    generation: u64,
    scan_mode: ScanMode,
    rng: StdRng,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            grid: create_empty_grid(),
            running: false,
            interval: config.interval(),
            generation: 0,
            scan_mode: config.scan_mode,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scan_mode(&self) -> ScanMode {
        self.scan_mode
    }

    /// Switch between snapshot and legacy in-place scanning. Takes effect
    /// on the next tick.
    pub fn set_scan_mode(&mut self, mode: ScanMode) {
        if self.scan_mode != mode {
            self.scan_mode = mode;
            info!(scan_mode = ?mode, "Scan mode changed");
        }
    }

    /// Advance the grid by one generation.
    pub fn tick(&mut self) -> TickSummary {
        self.grid = update_grid(&self.grid, &mut self.rng, self.scan_mode);
        self.generation = self.generation.saturating_add(1);
        let summary = TickSummary {
            generation: self.generation,
            occupied: self.grid.occupied_count(),
        };
        debug!(
            generation = summary.generation,
            occupied = summary.occupied,
            "Tick applied"
        );
        summary
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            info!(interval_ms = self.interval_ms(), "Simulation started");
        }
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            info!(generation = self.generation, "Simulation paused");
        }
    }

    /// Flip between running and paused; returns the new running flag.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Replace the grid with an empty one. Does not pause.
    pub fn reset(&mut self) {
        self.grid = create_empty_grid();
        self.generation = 0;
        info!(running = self.running, "Grid reset");
    }

    /// Flip occupancy at `(row, col)`; the age always restarts at zero.
    /// Returns the new cell, or `None` for coordinates outside the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Option<Cell> {
        let current = self.grid.get(row, col)?;
        let next = if current.occupied { Cell::EMPTY } else { Cell::SPROUT };
        self.grid.set(row, col, next);
        Some(next)
    }

    /// Change the tick interval. Values below [`MIN_INTERVAL_MS`] are
    /// rejected and the current interval is kept.
    pub fn set_interval_ms(&mut self, ms: u64) -> Result<Duration, SimulationError> {
        if ms < MIN_INTERVAL_MS {
            warn!(
                requested_ms = ms,
                minimum_ms = MIN_INTERVAL_MS,
                current_ms = self.interval_ms(),
                "Interval rejected"
            );
            return Err(SimulationError::IntervalTooShort {
                requested_ms: ms,
                minimum_ms: MIN_INTERVAL_MS,
            });
        }
        self.interval = Duration::from_millis(ms);
        info!(interval_ms = ms, "Interval updated");
        Ok(self.interval)
    }

    pub fn apply_seed(&mut self, seed: &Seed) {
        seeds::apply_seed(&mut self.grid, seed);
        self.generation = 0;
        info!(seed = seed.name, "Seed applied");
    }

    pub fn scatter(&mut self, density: f64) {
        seeds::scatter(&mut self.grid, &mut self.rng, density);
        self.generation = 0;
        info!(density, occupied = self.grid.occupied_count(), "Grid scattered");
    }

    fn interval_ms(&self) -> u64 {
        u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX)
    }
}
