//! Event System
//!
//! Types and implementations for activity events emitted by the dashboard
//! orchestrator and its background workers

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// The orchestrator applying a refresh on the presentation thread.
    /// The periodic ticker has no voice of its own; its ticks surface as
    /// orchestrator refreshes.
    Orchestrator,
    /// Network change watcher.
    NetworkWatcher,
    /// Connected device presenter.
    DevicePresenter,
    /// Shutdown sequencer.
    Sequencer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    StateChange,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn orchestrator(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Orchestrator, msg, event_type, log_level)
    }

    pub fn network_watcher(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::NetworkWatcher, msg, event_type, log_level)
    }

    pub fn device_presenter(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::DevicePresenter, msg, event_type, log_level)
    }

    pub fn sequencer(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Sequencer, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display_format() {
        let event = Event::orchestrator(
            "Clock refreshed".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("] Clock refreshed"));
    }

    #[test]
    fn test_success_events_always_display() {
        let event = Event::network_watcher(
            "Network change detected".to_string(),
            EventType::Success,
            LogLevel::Trace,
        );
        assert!(event.should_display());
    }
}
