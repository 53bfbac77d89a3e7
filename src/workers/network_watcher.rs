//! Network change watcher
//!
//! Bridges OS-level connectivity changes into the presentation task. Each
//! observed configuration change is forwarded exactly once, in observation
//! order, on the dispatcher's low-priority lane: a network refresh must
//! never preempt user-facing work. The watcher performs no coalescing of
//! its own beyond the sampling cadence.

use crate::consts::dashboard_consts::network_watch::poll_interval;
use crate::dispatcher::{DashboardCommand, Dispatcher, RefreshTrigger};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::providers::NetworkInfoProvider;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{MissedTickBehavior, interval};

/// Run the watcher with the fixed production cadence.
pub async fn network_watcher_task(
    network: Arc<dyn NetworkInfoProvider>,
    dispatcher: Dispatcher,
    event_sender: mpsc::Sender<Event>,
    shutdown: broadcast::Receiver<()>,
) {
    network_watcher_task_with_interval(network, dispatcher, event_sender, shutdown, poll_interval())
        .await;
}

pub async fn network_watcher_task_with_interval(
    network: Arc<dyn NetworkInfoProvider>,
    dispatcher: Dispatcher,
    event_sender: mpsc::Sender<Event>,
    mut shutdown: broadcast::Receiver<()>,
    period: Duration,
) {
    // The baseline is whatever the orchestrator's initial refresh showed;
    // only transitions away from it are notifications.
    let mut last_seen = fingerprint(network.as_ref()).await;

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let current = fingerprint(network.as_ref()).await;
                if current != last_seen {
                    last_seen = current;
                    let _ = event_sender
                        .send(Event::network_watcher(
                            "Network change detected".to_string(),
                            EventType::Refresh,
                            LogLevel::Debug,
                        ))
                        .await;
                    dispatcher
                        .dispatch_low(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
                        .await;
                }
            }
            _ = shutdown.recv() => break,
        }
    }
}

/// Digest of the displayed network configuration. Byte counters are
/// deliberately excluded: traffic is not a configuration change.
async fn fingerprint(network: &dyn NetworkInfoProvider) -> u64 {
    let mut hasher = DefaultHasher::new();
    network.device_name().hash(&mut hasher);
    network.current_ipv4_address().hash(&mut hasher);
    network.current_network_name().hash(&mut hasher);
    for adapter in network.network_adapters().await {
        adapter.name.hash(&mut hasher);
        adapter.ipv4.hash(&mut hasher);
        adapter.mac.hash(&mut hasher);
    }
    hasher.finish()
}
