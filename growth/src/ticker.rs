// ticker.rs - Periodic tick source
// A Ticker only sends Tick messages; the simulation owner applies them one at a time

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

/// Signal emitted once per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Identifies the ticker that sent this tick.
    pub epoch: u64,
    /// 1-based count of ticks sent by that ticker.
    pub sequence: u64,
}

/// Handle to a running tick task. Dropping it cancels the task.
#[derive(Debug)]
pub struct Ticker {
    epoch: u64,
    period: watch::Sender<Duration>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a ticker on `runtime`. The first tick fires one full `period`
    /// after this call.
    pub fn spawn(
        runtime: &Handle,
        epoch: u64,
        period: Duration,
        ticks: mpsc::UnboundedSender<Tick>,
    ) -> Self {
        let period = period.max(Duration::from_millis(1));
        // Fix the first deadline now, not when the task is first polled
        let first = Instant::now() + period;
        let (period_tx, period_rx) = watch::channel(period);
        let task = runtime.spawn(run(epoch, first, period, period_rx, ticks));
        info!(epoch, period_ms = millis(period), "Ticker started");
        Self {
            epoch,
            period: period_tx,
            task,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn period(&self) -> Duration {
        *self.period.borrow()
    }

    /// Change the period. The wait already in progress is kept; the new
    /// period applies from the next tick onwards.
    pub fn set_period(&self, period: Duration) {
        self.period.send_replace(period.max(Duration::from_millis(1)));
    }

    /// Cancel the task. No tick is sent after this returns.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
        debug!(epoch = self.epoch, "Ticker stopped");
    }
}

async fn run(
    epoch: u64,
    first: Instant,
    period: Duration,
    mut period_rx: watch::Receiver<Duration>,
    ticks: mpsc::UnboundedSender<Tick>,
) {
    // Period changes are only picked up after a tick has fired
    let mut interval = schedule(first, period);
    let mut sequence: u64 = 0;

    loop {
        interval.tick().await;
        sequence = sequence.saturating_add(1);
        if ticks.send(Tick { epoch, sequence }).is_err() {
            debug!(epoch, "Tick receiver gone");
            break;
        }

        match period_rx.has_changed() {
            Ok(true) => {
                let period = *period_rx.borrow_and_update();
                interval = schedule(Instant::now() + period, period);
                debug!(epoch, period_ms = millis(period), "Ticker rescheduled");
            }
            Ok(false) => {}
            Err(_) => break,
        }
    }
}

fn schedule(start: Instant, period: Duration) -> Interval {
    let mut interval = time::interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

fn millis(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
}
