// lib.rs - Cellular growth simulation: grid model, growth rule and tick scheduling

pub mod config;      // Interval limits and simulation settings
pub mod error;
pub mod grid;        // Cell and grid types
pub mod seeds;       // Starting patterns
pub mod session;     // Host-side controller
pub mod simulation;  // Owned simulation state
pub mod ticker;      // Periodic tick source
pub mod update;      // Growth and aging rule

pub use config::{DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS, SimulationConfig};
pub use error::SimulationError;
pub use grid::{Cell, GRID_SIZE, Grid, create_empty_grid};
pub use seeds::{SEEDS, Seed};
pub use session::Session;
pub use simulation::{Simulation, TickSummary};
pub use ticker::{Tick, Ticker};
pub use update::{ScanMode, update_grid};
