//! Runtime wiring for the dashboard workers
//!
//! Spawns the background trigger sources and hands their join handles back
//! to the session layer, which awaits them on every exit path.

use crate::dispatcher::Dispatcher;
use crate::events::Event;
use crate::providers::{DeviceEnumerator, NetworkInfoProvider};
use crate::workers::{device_presenter, network_watcher, time_ticker};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Spawn the time ticker, network watcher, and device presenter.
///
/// Must be called only after the orchestrator's initial full refresh has
/// completed: the workers' first dispatches assume the snapshot is already
/// fully populated.
pub fn start_dashboard_workers(
    network: Arc<dyn NetworkInfoProvider>,
    devices: Arc<dyn DeviceEnumerator>,
    dispatcher: Dispatcher,
    event_sender: mpsc::Sender<Event>,
    shutdown: &broadcast::Sender<()>,
) -> Vec<JoinHandle<()>> {
    let mut join_handles = Vec::new();

    // Periodic time-of-day refresh
    let ticker_handle = {
        let dispatcher = dispatcher.clone();
        let shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            time_ticker::time_ticker_task(dispatcher, shutdown).await;
        })
    };
    join_handles.push(ticker_handle);

    // Network change subscription. Owned here for the whole session; the
    // broadcast shutdown releases it so no callback outlives its owner.
    let watcher_handle = {
        let dispatcher = dispatcher.clone();
        let event_sender = event_sender.clone();
        let shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            network_watcher::network_watcher_task(network, dispatcher, event_sender, shutdown)
                .await;
        })
    };
    join_handles.push(watcher_handle);

    // Peer device push updates
    let presenter_handle = {
        let shutdown = shutdown.subscribe();
        tokio::spawn(async move {
            device_presenter::device_presenter_task(devices, dispatcher, event_sender, shutdown)
                .await;
        })
    };
    join_handles.push(presenter_handle);

    join_handles
}
