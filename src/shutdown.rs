//! Shutdown sequencer
//!
//! A two-state machine: `Idle -> Armed(kind)`. Arming hands the OS power
//! interface a fixed grace delay and is first-wins: repeated requests while
//! armed are ignored rather than treated as errors, so rapid repeated
//! clicks can never schedule two power actions. There is no cancel path
//! back to `Idle`; the terminal transition is the process exiting.

use crate::consts::dashboard_consts::power::shutdown_grace;
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::providers::{PowerActionKind, PowerControl};
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SequencerState {
    Idle,
    Armed(PowerActionKind),
}

pub struct ShutdownSequencer {
    state: SequencerState,
    power: Arc<dyn PowerControl>,
    event_sender: mpsc::Sender<Event>,
}

impl ShutdownSequencer {
    pub fn new(power: Arc<dyn PowerControl>, event_sender: mpsc::Sender<Event>) -> Self {
        Self {
            state: SequencerState::Idle,
            power,
            event_sender,
        }
    }

    /// Arm the power action. Returns `true` if this call armed the
    /// sequencer, `false` if it was already armed and the request was
    /// ignored.
    pub fn arm(&mut self, kind: PowerActionKind) -> bool {
        if matches!(self.state, SequencerState::Armed(_)) {
            return false;
        }
        self.state = SequencerState::Armed(kind);
        self.power.begin_shutdown(kind, shutdown_grace());
        let _ = self.event_sender.try_send(Event::sequencer(
            format!("{} armed", kind),
            EventType::StateChange,
            LogLevel::Info,
        ));
        true
    }

    /// The armed action, if any. Used by the UI to show the terminal
    /// "going down" state.
    pub fn armed_kind(&self) -> Option<PowerActionKind> {
        match self.state {
            SequencerState::Idle => None,
            SequencerState::Armed(kind) => Some(kind),
        }
    }
}
