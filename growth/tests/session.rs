use std::time::Duration;

use growth::{Cell, Session, SimulationConfig, SimulationError, Ticker};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

fn session() -> Session {
    Session::new(
        Handle::current(),
        &SimulationConfig {
            seed: Some(99),
            ..SimulationConfig::default()
        },
    )
}

async fn wait(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn first_tick_arrives_after_one_interval() {
    let mut session = session();
    session.start();
    assert!(session.is_running());

    wait(950).await;
    assert_eq!(session.pump(), 0);

    wait(100).await;
    assert_eq!(session.pump(), 1);
    assert_eq!(session.simulation().generation(), 1);

    wait(1000).await;
    assert_eq!(session.pump(), 1);
    assert_eq!(session.simulation().generation(), 2);
}

#[tokio::test(start_paused = true)]
async fn each_tick_applies_exactly_once() {
    let mut session = session();
    session.start();
    wait(3050).await;
    assert_eq!(session.pump(), 3);
    assert_eq!(session.pump(), 0);
    assert_eq!(session.simulation().generation(), 3);
}

#[tokio::test(start_paused = true)]
async fn pause_stops_ticks() {
    let mut session = session();
    session.start();
    wait(1050).await;
    assert_eq!(session.pump(), 1);

    assert!(!session.toggle_running());
    assert_eq!(session.ticker_period(), None);
    wait(5000).await;
    assert_eq!(session.pump(), 0);
    assert_eq!(session.simulation().generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn pause_discards_pending_ticks() {
    let mut session = session();
    session.start();
    wait(2050).await;
    session.pause();
    assert_eq!(session.pump(), 0);
    assert_eq!(session.simulation().generation(), 0);

    // A fresh start waits a full interval again.
    session.start();
    wait(500).await;
    assert_eq!(session.pump(), 0);
    wait(550).await;
    assert_eq!(session.pump(), 1);
}

#[tokio::test(start_paused = true)]
async fn interval_change_applies_at_next_boundary() {
    let mut session = session();
    session.start();

    wait(200).await;
    assert_eq!(session.set_interval_ms(300), Ok(Duration::from_millis(300)));
    assert_eq!(session.ticker_period(), Some(Duration::from_millis(300)));

    // The wait in progress is not shortened.
    wait(750).await;
    assert_eq!(session.pump(), 0);
    wait(100).await;
    assert_eq!(session.pump(), 1);

    // From here on the new period is used.
    wait(260).await;
    assert_eq!(session.pump(), 1);
    wait(300).await;
    assert_eq!(session.pump(), 1);
}

#[tokio::test(start_paused = true)]
async fn interval_change_right_after_start_keeps_first_wait() {
    let mut session = session();
    session.start();
    // No time passes, so the ticker task has not been polled yet.
    session.set_interval_ms(300).unwrap();

    wait(350).await;
    assert_eq!(session.pump(), 0);
    wait(700).await;
    assert_eq!(session.pump(), 1);

    wait(300).await;
    assert_eq!(session.pump(), 1);
}

#[tokio::test(start_paused = true)]
async fn rejected_interval_keeps_current_schedule() {
    let mut session = session();
    session.start();

    let err = session.set_interval_ms(99).unwrap_err();
    assert!(matches!(err, SimulationError::IntervalTooShort { requested_ms: 99, .. }));
    assert_eq!(session.simulation().interval(), Duration::from_millis(1000));
    assert_eq!(session.ticker_period(), Some(Duration::from_millis(1000)));

    wait(1050).await;
    assert_eq!(session.pump(), 1);
}

#[tokio::test(start_paused = true)]
async fn interval_set_while_paused_is_used_on_start() {
    let mut session = session();
    session.set_interval_ms(100).unwrap();
    session.start();
    wait(350).await;
    assert_eq!(session.pump(), 3);
}

#[tokio::test(start_paused = true)]
async fn reset_while_running_keeps_running() {
    let mut session = session();
    session.toggle_cell(5, 5);
    session.start();
    wait(1050).await;
    session.pump();

    session.reset();
    assert!(session.is_running());
    assert!(session.grid().is_empty());
    assert_eq!(session.simulation().generation(), 0);

    wait(1000).await;
    assert_eq!(session.pump(), 1);
    assert!(session.grid().is_empty());
}

#[tokio::test(start_paused = true)]
async fn toggled_cell_is_seen_by_next_tick() {
    let mut session = session();
    session.start();
    wait(400).await;
    assert_eq!(session.toggle_cell(5, 5), Some(Cell::SPROUT));
    wait(650).await;
    assert_eq!(session.pump(), 1);
    assert_eq!(session.grid().get(5, 5), Some(Cell { occupied: true, age: 1 }));
}

#[tokio::test(start_paused = true)]
async fn stopped_ticker_sends_nothing_more() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::spawn(&Handle::current(), 7, Duration::from_millis(200), tx);

    wait(450).await;
    let first = rx.try_recv().unwrap();
    let second = rx.try_recv().unwrap();
    assert_eq!((first.epoch, first.sequence), (7, 1));
    assert_eq!((second.epoch, second.sequence), (7, 2));

    ticker.stop();
    wait(2000).await;
    assert!(rx.try_recv().is_err());
}
