//! Session setup and initialization

use crate::config::SettingsStore;
use crate::consts::dashboard_consts::EVENT_QUEUE_SIZE;
use crate::dispatcher::{DispatchQueue, Dispatcher, dispatch_channel};
use crate::events::Event;
use crate::orchestrator::DashboardOrchestrator;
use crate::providers::board::DetectedBoard;
use crate::providers::devices::UsbDeviceEnumerator;
use crate::providers::network::SystemNetworkProvider;
use crate::providers::os_version::SystemVersionSource;
use crate::providers::power::SystemPowerControl;
use crate::providers::{DeviceEnumerator, NetworkInfoProvider};
use crate::runtime::start_dashboard_workers;
use crate::shutdown::ShutdownSequencer;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// The snapshot owner, already fully refreshed once
    pub orchestrator: DashboardOrchestrator,
    /// Shutdown/restart state machine
    pub sequencer: ShutdownSequencer,
    /// Commands marshaled by the background workers
    pub queue: DispatchQueue,
    /// Handle for dispatching user-initiated refreshes
    pub dispatcher: Dispatcher,
    /// Activity events for the log panel / console
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for worker tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop all workers
    pub shutdown_sender: broadcast::Sender<()>,
}

/// Sets up a dashboard session
///
/// Common setup shared by TUI and headless modes:
/// 1. Records first-run completion in the settings store
/// 2. Builds the system-backed providers and channels
/// 3. Runs the orchestrator's initial full refresh to completion
/// 4. Spawns the trigger workers (only after step 3, so no trigger can
///    land on a partially populated snapshot)
pub async fn setup_session(settings: &SettingsStore) -> SessionData {
    if let Err(e) = settings.mark_first_run_completed() {
        crate::print_cmd_warn!("Settings", "Could not record first-run completion: {}", e);
    }

    let network: Arc<dyn NetworkInfoProvider> = Arc::new(SystemNetworkProvider::new());
    let devices: Arc<dyn DeviceEnumerator> = Arc::new(UsbDeviceEnumerator::new());

    let (event_sender, event_receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let (dispatcher, queue) = dispatch_channel();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let mut orchestrator = DashboardOrchestrator::new(
        Arc::new(DetectedBoard::new()),
        Arc::new(SystemVersionSource::new()),
        network.clone(),
        devices.clone(),
        event_sender.clone(),
    );
    orchestrator.start().await;

    let join_handles = start_dashboard_workers(
        network,
        devices,
        dispatcher.clone(),
        event_sender.clone(),
        &shutdown_sender,
    );

    let sequencer = ShutdownSequencer::new(Arc::new(SystemPowerControl::new()), event_sender);

    SessionData {
        orchestrator,
        sequencer,
        queue,
        dispatcher,
        event_receiver,
        join_handles,
        shutdown_sender,
    }
}
