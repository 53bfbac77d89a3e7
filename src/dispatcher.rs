//! Marshal-to-presentation-thread primitive
//!
//! All snapshot mutation happens on one presentation task. Off-thread
//! sources (the time ticker, the network watcher, the device presenter)
//! clone a `Dispatcher` handle and send commands; the presentation task
//! drains the paired `DispatchQueue`. Two bounded lanes give network-change
//! work a lower priority than everything else: the consumer always empties
//! the normal lane before looking at the low lane, and each lane is FIFO.

use crate::consts::dashboard_consts::DISPATCH_QUEUE_SIZE;
use crate::snapshot::ConnectedDevice;
use tokio::sync::mpsc;

/// The event that requested a refresh. Transient; exists only for the
/// duration of one dispatch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RefreshTrigger {
    /// Fixed-interval tick; refreshes only the time of day.
    Periodic,
    /// OS-level connectivity change; refreshes the network view.
    NetworkChanged,
    /// User-requested full refresh.
    Manual,
}

/// A unit of work marshaled onto the presentation task.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DashboardCommand {
    Refresh(RefreshTrigger),
    ReplaceDevices(Vec<ConnectedDevice>),
}

/// Sending half, cloned into every background worker.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    normal: mpsc::Sender<DashboardCommand>,
    low: mpsc::Sender<DashboardCommand>,
}

impl Dispatcher {
    /// Queue a command at normal priority.
    pub async fn dispatch(&self, command: DashboardCommand) {
        let _ = self.normal.send(command).await;
    }

    /// Queue a command at low priority. Low-lane commands are only applied
    /// once the normal lane is empty, so they never preempt user-facing
    /// work.
    pub async fn dispatch_low(&self, command: DashboardCommand) {
        let _ = self.low.send(command).await;
    }
}

/// Receiving half, owned by the presentation task.
#[derive(Debug)]
pub struct DispatchQueue {
    normal: mpsc::Receiver<DashboardCommand>,
    low: mpsc::Receiver<DashboardCommand>,
    normal_closed: bool,
}

impl DispatchQueue {
    /// Non-blocking drain step: normal lane first, then low.
    pub fn try_next(&mut self) -> Option<DashboardCommand> {
        if let Ok(command) = self.normal.try_recv() {
            return Some(command);
        }
        self.low.try_recv().ok()
    }

    /// Await the next command, normal lane first. Returns `None` once every
    /// `Dispatcher` handle has been dropped and both lanes are drained.
    pub async fn next(&mut self) -> Option<DashboardCommand> {
        loop {
            if let Ok(command) = self.normal.try_recv() {
                return Some(command);
            }
            if self.normal_closed {
                return self.low.recv().await;
            }
            tokio::select! {
                biased;
                command = self.normal.recv() => match command {
                    Some(command) => return Some(command),
                    None => self.normal_closed = true,
                },
                command = self.low.recv() => return command,
            }
        }
    }
}

/// Create a connected dispatcher/queue pair with bounded lanes.
pub fn dispatch_channel() -> (Dispatcher, DispatchQueue) {
    let (normal_sender, normal_receiver) = mpsc::channel(DISPATCH_QUEUE_SIZE);
    let (low_sender, low_receiver) = mpsc::channel(DISPATCH_QUEUE_SIZE);
    (
        Dispatcher {
            normal: normal_sender,
            low: low_sender,
        },
        DispatchQueue {
            normal: normal_receiver,
            low: low_receiver,
            normal_closed: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    // The normal lane must fully drain before any low-lane command is seen.
    async fn test_normal_lane_drains_before_low() {
        let (dispatcher, mut queue) = dispatch_channel();

        dispatcher
            .dispatch_low(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            .await;
        dispatcher
            .dispatch(DashboardCommand::Refresh(RefreshTrigger::Periodic))
            .await;
        dispatcher
            .dispatch(DashboardCommand::Refresh(RefreshTrigger::Manual))
            .await;

        assert_eq!(
            queue.try_next(),
            Some(DashboardCommand::Refresh(RefreshTrigger::Periodic))
        );
        assert_eq!(
            queue.try_next(),
            Some(DashboardCommand::Refresh(RefreshTrigger::Manual))
        );
        assert_eq!(
            queue.try_next(),
            Some(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
        );
        assert_eq!(queue.try_next(), None);
    }

    #[tokio::test]
    // Within one lane, commands come out in dispatch order.
    async fn test_lane_preserves_fifo_order() {
        let (dispatcher, mut queue) = dispatch_channel();

        for _ in 0..3 {
            dispatcher
                .dispatch_low(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
                .await;
        }
        dispatcher
            .dispatch_low(DashboardCommand::ReplaceDevices(Vec::new()))
            .await;

        for _ in 0..3 {
            assert_eq!(
                queue.next().await,
                Some(DashboardCommand::Refresh(RefreshTrigger::NetworkChanged))
            );
        }
        assert_eq!(
            queue.next().await,
            Some(DashboardCommand::ReplaceDevices(Vec::new()))
        );
    }

    #[tokio::test]
    // The queue ends only after all dispatcher handles are gone.
    async fn test_queue_ends_when_dispatchers_drop() {
        let (dispatcher, mut queue) = dispatch_channel();
        dispatcher
            .dispatch(DashboardCommand::Refresh(RefreshTrigger::Manual))
            .await;
        drop(dispatcher);

        assert_eq!(
            queue.next().await,
            Some(DashboardCommand::Refresh(RefreshTrigger::Manual))
        );
        assert_eq!(queue.next().await, None);
    }
}
