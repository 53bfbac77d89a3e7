//! Connected device enumerator
//!
//! Lists the peer devices currently attached to the board. The
//! orchestrator reads this exactly once at startup; afterwards the device
//! presenter worker pushes changes through the dispatcher.

use crate::snapshot::ConnectedDevice;
use cfg_if::cfg_if;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait DeviceEnumerator: Send + Sync {
    /// Currently attached peer devices, in stable id order.
    fn connected_devices(&self) -> Vec<ConnectedDevice>;
}

/// Enumerates USB devices from the sysfs tree on Linux. Other platforms
/// report an empty list.
#[derive(Debug, Default)]
pub struct UsbDeviceEnumerator;

impl UsbDeviceEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceEnumerator for UsbDeviceEnumerator {
    fn connected_devices(&self) -> Vec<ConnectedDevice> {
        cfg_if! {
            if #[cfg(target_os = "linux")] {
                scan_sysfs_usb("/sys/bus/usb/devices")
            } else {
                Vec::new()
            }
        }
    }
}

/// Walk a sysfs USB device directory and collect entries exposing a
/// product name. Interface nodes (names containing ':') carry no product
/// of their own and are skipped.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn scan_sysfs_usb(root: &str) -> Vec<ConnectedDevice> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("USB sysfs scan unavailable: {}", e);
            return Vec::new();
        }
    };

    let mut devices: Vec<ConnectedDevice> = entries
        .flatten()
        .filter_map(|entry| {
            let id = entry.file_name().to_string_lossy().to_string();
            if id.contains(':') {
                return None;
            }
            let product = std::fs::read_to_string(entry.path().join("product")).ok()?;
            let name = product.trim().to_string();
            if name.is_empty() {
                return None;
            }
            Some(ConnectedDevice { id, name })
        })
        .collect();
    devices.sort_by(|a, b| a.id.cmp(&b.id));
    devices
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_device(root: &std::path::Path, id: &str, product: Option<&str>) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        if let Some(product) = product {
            fs::write(dir.join("product"), format!("{}\n", product)).unwrap();
        }
    }

    #[test]
    fn test_scan_collects_named_devices_in_id_order() {
        let tmp = tempdir().unwrap();
        write_device(tmp.path(), "2-1", Some("USB Keyboard"));
        write_device(tmp.path(), "1-1", Some("Mass Storage"));
        write_device(tmp.path(), "usb1", None); // root hub without product

        let devices = scan_sysfs_usb(tmp.path().to_str().unwrap());
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].id, "1-1");
        assert_eq!(devices[0].name, "Mass Storage");
        assert_eq!(devices[1].id, "2-1");
    }

    #[test]
    fn test_scan_skips_interface_nodes() {
        let tmp = tempdir().unwrap();
        write_device(tmp.path(), "1-1", Some("Camera"));
        write_device(tmp.path(), "1-1:1.0", Some("Camera Interface"));

        let devices = scan_sysfs_usb(tmp.path().to_str().unwrap());
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].name, "Camera");
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let devices = scan_sysfs_usb("/definitely/not/a/sysfs/root");
        assert!(devices.is_empty());
    }
}
