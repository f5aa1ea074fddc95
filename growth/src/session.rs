// session.rs - Host-side controller tying a Simulation to a Ticker
// The host calls pump() from its frame loop; ticks from stopped tickers are dropped

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::grid::{Cell, Grid};
use crate::seeds::Seed;
use crate::simulation::Simulation;
use crate::ticker::{Tick, Ticker};
use crate::update::ScanMode;

pub struct Session {
    simulation: Simulation,
    runtime: Handle,
    ticks_tx: mpsc::UnboundedSender<Tick>,
    ticks_rx: mpsc::UnboundedReceiver<Tick>,
    ticker: Option<Ticker>,
    next_epoch: u64,
}

impl Session {
    pub fn new(runtime: Handle, config: &SimulationConfig) -> Self {
        let (ticks_tx, ticks_rx) = mpsc::unbounded_channel();
        Self {
            simulation: Simulation::new(config),
            runtime,
            ticks_tx,
            ticks_rx,
            ticker: None,
            next_epoch: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn grid(&self) -> &Grid {
        self.simulation.grid()
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running()
    }

    /// Period of the active ticker, if the simulation is running.
    pub fn ticker_period(&self) -> Option<Duration> {
        self.ticker.as_ref().map(Ticker::period)
    }

    pub fn start(&mut self) {
        if self.simulation.is_running() {
            return;
        }
        self.simulation.start();
        self.next_epoch = self.next_epoch.wrapping_add(1);
        self.ticker = Some(Ticker::spawn(
            &self.runtime,
            self.next_epoch,
            self.simulation.interval(),
            self.ticks_tx.clone(),
        ));
    }

    pub fn pause(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.simulation.pause();
        let dropped = self.drain();
        if dropped > 0 {
            debug!(dropped, "Discarded pending ticks on pause");
        }
    }

    /// Start or pause; returns the new running flag.
    pub fn toggle_running(&mut self) -> bool {
        if self.simulation.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.simulation.is_running()
    }

    /// Clear the grid. A running simulation keeps running.
    pub fn reset(&mut self) {
        self.simulation.reset();
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Option<Cell> {
        self.simulation.toggle_cell(row, col)
    }

    /// Validate and apply a new interval. A running ticker picks it up at
    /// its next tick; a rejected value changes nothing.
    pub fn set_interval_ms(&mut self, ms: u64) -> Result<Duration, SimulationError> {
        let interval = self.simulation.set_interval_ms(ms)?;
        if let Some(ticker) = &self.ticker {
            ticker.set_period(interval);
        }
        Ok(interval)
    }

    pub fn set_scan_mode(&mut self, mode: ScanMode) {
        self.simulation.set_scan_mode(mode);
    }

    pub fn apply_seed(&mut self, seed: &Seed) {
        self.simulation.apply_seed(seed);
    }

    pub fn scatter(&mut self, density: f64) {
        self.simulation.scatter(density);
    }

    /// Apply every pending tick from the current ticker. Returns how many
    /// ticks were applied.
    pub fn pump(&mut self) -> usize {
        let current = self.ticker.as_ref().map(Ticker::epoch);
        let mut applied = 0;
        while let Ok(tick) = self.ticks_rx.try_recv() {
            if Some(tick.epoch) != current {
                debug!(epoch = tick.epoch, sequence = tick.sequence, "Stale tick dropped");
                continue;
            }
            self.simulation.tick();
            applied += 1;
        }
        applied
    }

    fn drain(&mut self) -> usize {
        let mut dropped = 0;
        while self.ticks_rx.try_recv().is_ok() {
            dropped += 1;
        }
        dropped
    }
}
