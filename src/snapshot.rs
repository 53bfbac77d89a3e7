//! Dashboard snapshot data model
//!
//! The full set of displayed values. The snapshot has no identity beyond
//! "latest known value": every field is recomputed from a provider and
//! mutated only by the orchestrator on the presentation thread.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Shown when the raw OS version is unavailable or unparsable.
pub const OS_VERSION_UNAVAILABLE: &str = "OS version not available";

/// Shown when the network name provider reports no current network.
pub const NOT_CONNECTED: &str = "Not connected";

/// Opaque reference to a board image asset. The dashboard never inspects
/// it beyond display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardImage(pub String);

impl BoardImage {
    pub fn placeholder() -> Self {
        BoardImage("generic-board".to_string())
    }
}

/// One network interface as enumerated by the network info provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAdapter {
    pub name: String,
    pub ipv4: Option<String>,
    pub mac: Option<String>,
    pub received_bytes: u64,
    pub transmitted_bytes: u64,
}

/// One discovered peer device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedDevice {
    pub id: String,
    pub name: String,
}

/// The network-derived subset of the snapshot. Built off to the side and
/// committed in a single assignment so a renderer never observes a
/// partially-updated network view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkFields {
    pub device_name: String,
    pub ipv4_address: String,
    pub network_name: String,
    pub network_adapters: Vec<NetworkAdapter>,
}

/// The current, fully-or-not-at-all-updated set of displayed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub board_name: String,
    pub board_image: BoardImage,
    pub os_version: String,
    pub current_time: String,
    pub device_name: String,
    pub ipv4_address: String,
    pub network_name: String,
    pub network_adapters: Vec<NetworkAdapter>,
    pub connected_devices: Vec<ConnectedDevice>,
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self {
            board_name: String::new(),
            board_image: BoardImage::placeholder(),
            os_version: OS_VERSION_UNAVAILABLE.to_string(),
            current_time: String::new(),
            device_name: String::new(),
            ipv4_address: String::new(),
            network_name: NOT_CONNECTED.to_string(),
            network_adapters: Vec::new(),
            connected_devices: Vec::new(),
        }
    }
}

impl DashboardSnapshot {
    /// Commit a fully-built network view in one assignment.
    pub fn apply_network_fields(&mut self, fields: NetworkFields) {
        let NetworkFields {
            device_name,
            ipv4_address,
            network_name,
            network_adapters,
        } = fields;
        self.device_name = device_name;
        self.ipv4_address = ipv4_address;
        self.network_name = network_name;
        self.network_adapters = network_adapters;
    }
}

/// Decode a packed 64-bit OS version into `"major.minor.build.revision"`.
///
/// The packing is four big-endian-ordered 16-bit fields: bits 48-63 major,
/// 32-47 minor, 16-31 build, 0-15 revision. `None` renders as the
/// unavailable placeholder. Never panics.
pub fn format_os_version(raw: Option<u64>) -> String {
    match raw {
        Some(version) => format!(
            "{}.{}.{}.{}",
            (version >> 48) & 0xFFFF,
            (version >> 32) & 0xFFFF,
            (version >> 16) & 0xFFFF,
            version & 0xFFFF,
        ),
        None => OS_VERSION_UNAVAILABLE.to_string(),
    }
}

/// Format the current wall-clock time for display.
pub fn format_current_time() -> String {
    Local::now().format("%H:%M").to_string()
}
