//! Periodic refresh ticker
//!
//! Dispatches a `Periodic` refresh at a fixed interval. The trigger only
//! re-derives the time of day; the interval is a constant, not runtime
//! configuration.

use crate::consts::dashboard_consts::time_refresh::tick_interval;
use crate::dispatcher::{DashboardCommand, Dispatcher, RefreshTrigger};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{MissedTickBehavior, interval};

/// Run the ticker with the fixed production interval.
pub async fn time_ticker_task(dispatcher: Dispatcher, shutdown: broadcast::Receiver<()>) {
    time_ticker_task_with_interval(dispatcher, shutdown, tick_interval()).await;
}

/// Run the ticker with a configurable interval. Split out so tests can
/// drive it at millisecond cadence.
pub async fn time_ticker_task_with_interval(
    dispatcher: Dispatcher,
    mut shutdown: broadcast::Receiver<()>,
    period: Duration,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of an interval completes immediately; the orchestrator
    // already refreshed the clock during start(), so swallow it.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                dispatcher
                    .dispatch(DashboardCommand::Refresh(RefreshTrigger::Periodic))
                    .await;
            }
            _ = shutdown.recv() => break,
        }
    }
}
