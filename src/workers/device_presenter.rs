//! Connected device presenter
//!
//! Owns the peer-device list after startup. The orchestrator reads the
//! enumerator exactly once during its initial refresh; from then on this
//! worker watches for attach/detach and pushes whole replacement lists
//! through the dispatcher, so the snapshot's device list is swapped, never
//! edited in place.

use crate::consts::dashboard_consts::device_watch::poll_interval;
use crate::dispatcher::{DashboardCommand, Dispatcher};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::providers::DeviceEnumerator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tokio::time::{MissedTickBehavior, interval};

/// Run the presenter with the fixed production cadence.
pub async fn device_presenter_task(
    devices: Arc<dyn DeviceEnumerator>,
    dispatcher: Dispatcher,
    event_sender: mpsc::Sender<Event>,
    shutdown: broadcast::Receiver<()>,
) {
    device_presenter_task_with_interval(devices, dispatcher, event_sender, shutdown, poll_interval())
        .await;
}

pub async fn device_presenter_task_with_interval(
    devices: Arc<dyn DeviceEnumerator>,
    dispatcher: Dispatcher,
    event_sender: mpsc::Sender<Event>,
    mut shutdown: broadcast::Receiver<()>,
    period: Duration,
) {
    // Matches what the orchestrator's initial refresh displayed.
    let mut last_seen = devices.connected_devices();

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let current = devices.connected_devices();
                if current != last_seen {
                    last_seen = current.clone();
                    let _ = event_sender
                        .send(Event::device_presenter(
                            format!("Peer devices changed ({} attached)", current.len()),
                            EventType::Refresh,
                            LogLevel::Debug,
                        ))
                        .await;
                    dispatcher
                        .dispatch(DashboardCommand::ReplaceDevices(current))
                        .await;
                }
            }
            _ = shutdown.recv() => break,
        }
    }
}
