// config.rs - Simulation settings

use std::time::Duration;

use crate::update::ScanMode;

/// Smallest accepted tick interval.
pub const MIN_INTERVAL_MS: u64 = 100;

/// Tick interval used until the host sets another one.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub interval_ms: u64,
    pub scan_mode: ScanMode,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            scan_mode: ScanMode::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Interval to start with, raised to the minimum if configured too low.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}
