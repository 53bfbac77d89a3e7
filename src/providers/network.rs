//! Network info provider
//!
//! Answers the four network questions the dashboard asks: device name,
//! current IPv4 address, current network name, and the full adapter list.
//! The adapter list is the only asynchronous call; its completion is
//! marshaled onto the presentation task by the orchestrator.

use crate::snapshot::NetworkAdapter;
use std::net::IpAddr;
use sysinfo::{Networks, System};

#[cfg(test)]
use mockall::automock;

/// Shown when no interface holds a usable IPv4 address.
const NO_IPV4_ADDRESS: &str = "0.0.0.0";

const FALLBACK_DEVICE_NAME: &str = "Unknown device";

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait NetworkInfoProvider: Send + Sync {
    /// The device's host name.
    fn device_name(&self) -> String;

    /// The primary (first non-loopback) IPv4 address.
    fn current_ipv4_address(&self) -> String;

    /// The name of the currently connected network, or `None` when the
    /// device has no connectivity.
    fn current_network_name(&self) -> Option<String>;

    /// Every adapter the platform enumerates, in stable name order.
    async fn network_adapters(&self) -> Vec<NetworkAdapter>;
}

/// Platform-backed provider reading from the system network tables.
#[derive(Debug, Default)]
pub struct SystemNetworkProvider;

impl SystemNetworkProvider {
    pub fn new() -> Self {
        Self
    }

    /// The first non-loopback interface carrying an IPv4 address, with
    /// that address.
    fn active_ipv4_interface() -> Option<(String, String)> {
        let networks = Networks::new_with_refreshed_list();
        let mut candidates: Vec<(String, String)> = networks
            .iter()
            .filter_map(|(name, data)| {
                let ipv4 = data.ip_networks().iter().find_map(|ip| match ip.addr {
                    IpAddr::V4(addr) if !addr.is_loopback() => Some(addr.to_string()),
                    _ => None,
                })?;
                Some((name.clone(), ipv4))
            })
            .collect();
        // Stable choice when several interfaces are up.
        candidates.sort();
        candidates.into_iter().next()
    }
}

#[async_trait::async_trait]
impl NetworkInfoProvider for SystemNetworkProvider {
    fn device_name(&self) -> String {
        System::host_name().unwrap_or_else(|| FALLBACK_DEVICE_NAME.to_string())
    }

    fn current_ipv4_address(&self) -> String {
        Self::active_ipv4_interface()
            .map(|(_, ipv4)| ipv4)
            .unwrap_or_else(|| NO_IPV4_ADDRESS.to_string())
    }

    fn current_network_name(&self) -> Option<String> {
        // There is no portable SSID source on a headless board; the active
        // interface name is the network identity we can answer for.
        Self::active_ipv4_interface().map(|(name, _)| name)
    }

    async fn network_adapters(&self) -> Vec<NetworkAdapter> {
        let networks = Networks::new_with_refreshed_list();
        let mut adapters: Vec<NetworkAdapter> = networks
            .iter()
            .map(|(name, data)| {
                let ipv4 = data.ip_networks().iter().find_map(|ip| match ip.addr {
                    IpAddr::V4(addr) => Some(addr.to_string()),
                    IpAddr::V6(_) => None,
                });
                NetworkAdapter {
                    name: name.clone(),
                    ipv4,
                    mac: Some(data.mac_address().to_string()),
                    received_bytes: data.total_received(),
                    transmitted_bytes: data.total_transmitted(),
                }
            })
            .collect();
        // The platform table is unordered; the dashboard promises a stable
        // listing order.
        adapters.sort_by(|a, b| a.name.cmp(&b.name));
        adapters
    }
}
