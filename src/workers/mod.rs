//! Background workers
//!
//! Tokio tasks that feed the presentation task through the dispatcher.
//! None of them touch the snapshot directly; they stop on the broadcast
//! shutdown signal.

pub mod device_presenter;
pub mod network_watcher;
pub mod time_ticker;
