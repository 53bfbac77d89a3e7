//! Data providers
//!
//! External collaborators the orchestrator reads displayed state from.
//! Each provider is a trait with a system-backed implementation and a
//! mock for tests; the orchestrator only ever sees the trait object.

pub mod board;
pub mod devices;
pub mod network;
pub mod os_version;
pub mod power;

pub use board::BoardInfoProvider;
pub use devices::DeviceEnumerator;
pub use network::NetworkInfoProvider;
pub use os_version::OsVersionSource;
pub use power::{PowerActionKind, PowerControl};
