//! Power control
//!
//! The irrevocable end of the shutdown sequencer. Nothing is observed
//! after the OS call fires; failures are logged because there is no caller
//! left to report to.

use cfg_if::cfg_if;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

/// The power action the user selected. Always decided by the selection
/// surface as a variant, never by matching on display strings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum PowerActionKind {
    Shutdown,
    Restart,
}

/// OS-level power interface. `begin_shutdown` schedules the action after
/// `delay` and returns immediately; the process is expected to die.
#[cfg_attr(test, automock)]
pub trait PowerControl: Send + Sync {
    fn begin_shutdown(&self, kind: PowerActionKind, delay: Duration);
}

/// Drives the host's shutdown/reboot command.
#[derive(Debug, Default)]
pub struct SystemPowerControl;

impl SystemPowerControl {
    pub fn new() -> Self {
        Self
    }
}

impl PowerControl for SystemPowerControl {
    fn begin_shutdown(&self, kind: PowerActionKind, delay: Duration) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            cfg_if! {
                if #[cfg(unix)] {
                    let mut command = tokio::process::Command::new("systemctl");
                    command.arg(match kind {
                        PowerActionKind::Shutdown => "poweroff",
                        PowerActionKind::Restart => "reboot",
                    });
                    match command.status().await {
                        Ok(status) if status.success() => {}
                        Ok(status) => {
                            log::error!("Power action {} exited with {}", kind, status)
                        }
                        Err(e) => log::error!("Failed to begin power action {}: {}", kind, e),
                    }
                } else {
                    log::error!("Power action {} is not supported on this platform", kind);
                }
            }
        });
    }
}
