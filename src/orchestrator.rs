//! Dashboard orchestrator
//!
//! The single writer of the `DashboardSnapshot`. Every trigger (the
//! periodic tick, a network change, a user-requested refresh, a device
//! list push) arrives as a `DashboardCommand` on the presentation task
//! and is applied here. Provider failures degrade the affected field to a
//! placeholder; nothing in this module panics or propagates an error out
//! of a trigger handler, because trigger handlers run on callback paths
//! with no caller to observe a failure.

use crate::dispatcher::{DashboardCommand, RefreshTrigger};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::providers::{BoardInfoProvider, DeviceEnumerator, NetworkInfoProvider, OsVersionSource};
use crate::snapshot::{
    DashboardSnapshot, NOT_CONNECTED, NetworkFields, format_current_time, format_os_version,
};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct DashboardOrchestrator {
    snapshot: DashboardSnapshot,
    board: Arc<dyn BoardInfoProvider>,
    os_version: Arc<dyn OsVersionSource>,
    network: Arc<dyn NetworkInfoProvider>,
    devices: Arc<dyn DeviceEnumerator>,
    event_sender: mpsc::Sender<Event>,
    stopped: bool,
}

impl DashboardOrchestrator {
    pub fn new(
        board: Arc<dyn BoardInfoProvider>,
        os_version: Arc<dyn OsVersionSource>,
        network: Arc<dyn NetworkInfoProvider>,
        devices: Arc<dyn DeviceEnumerator>,
        event_sender: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            snapshot: DashboardSnapshot::default(),
            board,
            os_version,
            network,
            devices,
            event_sender,
            stopped: false,
        }
    }

    /// One full refresh of every field. Runs to completion before any
    /// worker is spawned, so the first rendered view is never partially
    /// populated. The device list is read here exactly once; afterwards
    /// the device presenter pushes replacements.
    pub async fn start(&mut self) {
        self.refresh_board_info();
        self.refresh_time();
        self.refresh_network().await;
        self.snapshot.connected_devices = self.devices.connected_devices();
        self.emit(
            "Initial refresh complete".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
    }

    /// Apply one marshaled command. A command that arrives after `stop()`
    /// is dropped without touching the snapshot.
    pub async fn handle(&mut self, command: DashboardCommand) {
        if self.stopped {
            return;
        }
        match command {
            DashboardCommand::Refresh(RefreshTrigger::Periodic) => {
                // Cheap by contract: only the clock, never I/O.
                self.refresh_time();
                self.emit(
                    "Clock refreshed".to_string(),
                    EventType::Refresh,
                    LogLevel::Debug,
                );
            }
            DashboardCommand::Refresh(RefreshTrigger::NetworkChanged) => {
                self.refresh_network().await;
                self.emit(
                    "Network view refreshed".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                );
            }
            DashboardCommand::Refresh(RefreshTrigger::Manual) => {
                self.refresh_board_info();
                self.refresh_time();
                self.refresh_network().await;
                self.emit(
                    "Manual refresh applied".to_string(),
                    EventType::Success,
                    LogLevel::Info,
                );
            }
            DashboardCommand::ReplaceDevices(devices) => {
                let count = devices.len();
                self.snapshot.connected_devices = devices;
                self.emit(
                    format!("Connected devices updated ({} attached)", count),
                    EventType::Refresh,
                    LogLevel::Debug,
                );
            }
        }
    }

    /// Mark the orchestrator torn down. Commands already queued but not
    /// yet applied become no-ops.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Read-only view for the renderer, safe between applied commands.
    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    fn refresh_board_info(&mut self) {
        self.snapshot.board_name = self.board.board_name();
        self.snapshot.board_image = self.board.board_image();
        let raw_version = self.os_version.raw_version();
        if raw_version.is_none() {
            self.emit(
                "OS version unavailable, showing placeholder".to_string(),
                EventType::Error,
                LogLevel::Warn,
            );
        }
        self.snapshot.os_version = format_os_version(raw_version);
    }

    fn refresh_time(&mut self) {
        self.snapshot.current_time = format_current_time();
    }

    /// Reread every network-derived field, then commit them in a single
    /// assignment: a renderer sees either the old view or the new one,
    /// never a mixture.
    async fn refresh_network(&mut self) {
        let fields = NetworkFields {
            device_name: self.network.device_name(),
            ipv4_address: self.network.current_ipv4_address(),
            network_name: self
                .network
                .current_network_name()
                .unwrap_or_else(|| NOT_CONNECTED.to_string()),
            network_adapters: self.network.network_adapters().await,
        };
        self.snapshot.apply_network_fields(fields);
    }

    fn emit(&self, msg: String, event_type: EventType, log_level: LogLevel) {
        // try_send: the orchestrator shares a task with the event drainer,
        // so it must never block on a full activity channel.
        let _ = self
            .event_sender
            .try_send(Event::orchestrator(msg, event_type, log_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::dispatch_channel;
    use crate::providers::board::MockBoardInfoProvider;
    use crate::providers::devices::MockDeviceEnumerator;
    use crate::providers::network::MockNetworkInfoProvider;
    use crate::providers::os_version::MockOsVersionSource;
    use crate::snapshot::{BoardImage, ConnectedDevice, NetworkAdapter, OS_VERSION_UNAVAILABLE};

    fn mock_board() -> MockBoardInfoProvider {
        let mut board = MockBoardInfoProvider::new();
        board
            .expect_board_name()
            .returning(|| "Raspberry Pi 3".to_string());
        board
            .expect_board_image()
            .returning(|| BoardImage("raspberry-pi".to_string()));
        board
    }

    fn mock_version(raw: Option<u64>) -> MockOsVersionSource {
        let mut version = MockOsVersionSource::new();
        version.expect_raw_version().returning(move || raw);
        version
    }

    fn mock_network(ipv4: &str, network_name: Option<&str>) -> MockNetworkInfoProvider {
        let mut network = MockNetworkInfoProvider::new();
        let ipv4 = ipv4.to_string();
        let network_name = network_name.map(|s| s.to_string());
        network
            .expect_device_name()
            .returning(|| "testboard".to_string());
        network
            .expect_current_ipv4_address()
            .returning(move || ipv4.clone());
        network
            .expect_current_network_name()
            .returning(move || network_name.clone());
        network.expect_network_adapters().returning(|| {
            vec![NetworkAdapter {
                name: "eth0".to_string(),
                ipv4: Some("192.168.1.20".to_string()),
                mac: Some("aa:bb:cc:dd:ee:ff".to_string()),
                received_bytes: 0,
                transmitted_bytes: 0,
            }]
        });
        network
    }

    fn mock_devices(devices: Vec<ConnectedDevice>) -> MockDeviceEnumerator {
        let mut enumerator = MockDeviceEnumerator::new();
        enumerator
            .expect_connected_devices()
            .returning(move || devices.clone());
        enumerator
    }

    fn orchestrator_with(
        board: MockBoardInfoProvider,
        version: MockOsVersionSource,
        network: MockNetworkInfoProvider,
        devices: MockDeviceEnumerator,
    ) -> DashboardOrchestrator {
        let (event_sender, _event_receiver) = mpsc::channel(100);
        DashboardOrchestrator::new(
            Arc::new(board),
            Arc::new(version),
            Arc::new(network),
            Arc::new(devices),
            event_sender,
        )
    }

    fn device(id: &str, name: &str) -> ConnectedDevice {
        ConnectedDevice {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    // start() must leave no field in its default, unpopulated state.
    async fn test_start_populates_every_field() {
        let raw = (10u64 << 48) | (17763u64 << 16) | 1u64;
        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(Some(raw)),
            mock_network("192.168.1.20", Some("eth0")),
            mock_devices(vec![device("1-1", "USB Keyboard")]),
        );
        orchestrator.start().await;

        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.board_name, "Raspberry Pi 3");
        assert_eq!(snapshot.board_image, BoardImage("raspberry-pi".to_string()));
        assert_eq!(snapshot.os_version, "10.0.17763.1");
        assert!(!snapshot.current_time.is_empty());
        assert_eq!(snapshot.device_name, "testboard");
        assert_eq!(snapshot.ipv4_address, "192.168.1.20");
        assert_eq!(snapshot.network_name, "eth0");
        assert_eq!(snapshot.network_adapters.len(), 1);
        assert_eq!(snapshot.connected_devices.len(), 1);
    }

    #[tokio::test]
    // Periodic ticks may only touch the clock. The network provider is
    // allowed exactly one use (during start); three subsequent ticks must
    // not call it again or disturb its fields.
    async fn test_periodic_tick_never_touches_network_state() {
        let mut network = MockNetworkInfoProvider::new();
        network
            .expect_device_name()
            .times(1)
            .returning(|| "testboard".to_string());
        network
            .expect_current_ipv4_address()
            .times(1)
            .returning(|| "10.0.0.9".to_string());
        network
            .expect_current_network_name()
            .times(1)
            .returning(|| Some("wlan0".to_string()));
        network
            .expect_network_adapters()
            .times(1)
            .returning(Vec::new);

        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(None),
            network,
            mock_devices(Vec::new()),
        );
        orchestrator.start().await;
        let before = orchestrator.snapshot().clone();

        for _ in 0..3 {
            orchestrator
                .handle(DashboardCommand::Refresh(RefreshTrigger::Periodic))
                .await;
        }

        let after = orchestrator.snapshot();
        assert_eq!(after.device_name, before.device_name);
        assert_eq!(after.ipv4_address, before.ipv4_address);
        assert_eq!(after.network_name, before.network_name);
        assert_eq!(after.network_adapters, before.network_adapters);
        assert_eq!(after.connected_devices, before.connected_devices);
        assert_eq!(after.board_name, before.board_name);
        assert!(!after.current_time.is_empty());
    }

    #[tokio::test]
    // A network change rereads all four network fields and leaves the
    // clock and device list alone.
    async fn test_network_change_replaces_network_fields_only() {
        let mut network = MockNetworkInfoProvider::new();
        network
            .expect_device_name()
            .returning(|| "testboard".to_string());
        // First read (start) sees ethernet, second (the change) sees wifi.
        network
            .expect_current_ipv4_address()
            .times(1)
            .returning(|| "192.168.1.20".to_string());
        network
            .expect_current_ipv4_address()
            .times(1)
            .returning(|| "10.0.0.42".to_string());
        network
            .expect_current_network_name()
            .times(1)
            .returning(|| Some("eth0".to_string()));
        network
            .expect_current_network_name()
            .times(1)
            .returning(|| Some("wlan0".to_string()));
        network.expect_network_adapters().returning(Vec::new);

        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(Some(1)),
            network,
            mock_devices(vec![device("1-1", "USB Keyboard")]),
        );
        orchestrator.start().await;
        let before = orchestrator.snapshot().clone();

        orchestrator
            .handle(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            .await;

        let after = orchestrator.snapshot();
        assert_eq!(after.ipv4_address, "10.0.0.42");
        assert_eq!(after.network_name, "wlan0");
        assert_eq!(after.connected_devices, before.connected_devices);
        assert_eq!(after.board_name, before.board_name);
        assert_eq!(after.os_version, before.os_version);
    }

    #[tokio::test]
    // Absent network name renders the literal placeholder.
    async fn test_absent_network_renders_not_connected() {
        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(Some(1)),
            mock_network("0.0.0.0", None),
            mock_devices(Vec::new()),
        );
        orchestrator.start().await;
        assert_eq!(orchestrator.snapshot().network_name, NOT_CONNECTED);
    }

    #[tokio::test]
    // An unavailable OS version degrades to the placeholder and the rest
    // of the refresh still completes.
    async fn test_unavailable_version_degrades_to_placeholder() {
        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(None),
            mock_network("192.168.1.20", Some("eth0")),
            mock_devices(Vec::new()),
        );
        orchestrator.start().await;

        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.os_version, OS_VERSION_UNAVAILABLE);
        assert_eq!(snapshot.board_name, "Raspberry Pi 3");
        assert_eq!(snapshot.ipv4_address, "192.168.1.20");
    }

    #[tokio::test]
    // Applying the same provider state twice yields an identical snapshot.
    async fn test_refresh_is_idempotent() {
        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(Some(7)),
            mock_network("192.168.1.20", Some("eth0")),
            mock_devices(vec![device("1-1", "USB Keyboard")]),
        );
        orchestrator.start().await;
        let first = orchestrator.snapshot().clone();

        orchestrator
            .handle(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            .await;
        orchestrator
            .handle(DashboardCommand::ReplaceDevices(vec![device(
                "1-1",
                "USB Keyboard",
            )]))
            .await;

        let second = orchestrator.snapshot();
        assert_eq!(second.network_adapters, first.network_adapters);
        assert_eq!(second.connected_devices, first.connected_devices);
        assert_eq!(second.ipv4_address, first.ipv4_address);
    }

    #[tokio::test]
    // Commands applied after stop() must not mutate the snapshot.
    async fn test_commands_after_stop_are_dropped() {
        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(Some(1)),
            mock_network("192.168.1.20", Some("eth0")),
            mock_devices(Vec::new()),
        );
        orchestrator.start().await;
        let before = orchestrator.snapshot().clone();

        orchestrator.stop();
        assert!(orchestrator.is_stopped());

        // A sentinel device list would be visible if the liveness check
        // were missing.
        orchestrator
            .handle(DashboardCommand::ReplaceDevices(vec![device(
                "sentinel",
                "Sentinel Device",
            )]))
            .await;
        orchestrator
            .handle(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            .await;

        assert_eq!(*orchestrator.snapshot(), before);
    }

    #[tokio::test]
    // End to end: start, three ticks, one network change, stop, then a
    // late event. Only the expected fields move at each step.
    async fn test_end_to_end_trigger_sequence() {
        let mut network = MockNetworkInfoProvider::new();
        network
            .expect_device_name()
            .returning(|| "testboard".to_string());
        network
            .expect_current_ipv4_address()
            .times(1)
            .returning(|| "192.168.1.20".to_string());
        network
            .expect_current_ipv4_address()
            .returning(|| "10.0.0.42".to_string());
        network
            .expect_current_network_name()
            .returning(|| Some("eth0".to_string()));
        network.expect_network_adapters().returning(Vec::new);

        let mut orchestrator = orchestrator_with(
            mock_board(),
            mock_version(Some(1)),
            network,
            mock_devices(Vec::new()),
        );

        let (dispatcher, mut queue) = dispatch_channel();
        orchestrator.start().await;
        let initial = orchestrator.snapshot().clone();

        // Three timer ticks.
        for _ in 0..3 {
            dispatcher
                .dispatch(DashboardCommand::Refresh(RefreshTrigger::Periodic))
                .await;
        }
        while let Some(command) = queue.try_next() {
            orchestrator.handle(command).await;
        }
        assert_eq!(orchestrator.snapshot().ipv4_address, initial.ipv4_address);

        // One network change.
        dispatcher
            .dispatch_low(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            .await;
        while let Some(command) = queue.try_next() {
            orchestrator.handle(command).await;
        }
        assert_eq!(orchestrator.snapshot().ipv4_address, "10.0.0.42");

        // Stop, then late events accomplish nothing.
        orchestrator.stop();
        let stopped_view = orchestrator.snapshot().clone();
        dispatcher
            .dispatch_low(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            .await;
        dispatcher
            .dispatch(DashboardCommand::ReplaceDevices(vec![device(
                "sentinel",
                "Sentinel Device",
            )]))
            .await;
        while let Some(command) = queue.try_next() {
            orchestrator.handle(command).await;
        }
        assert_eq!(*orchestrator.snapshot(), stopped_view);
    }
}
