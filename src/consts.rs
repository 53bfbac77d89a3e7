pub mod dashboard_consts {
    //! Dashboard Scheduling Constants
    //!
    //! This module contains the fixed scheduling constants for the dashboard,
    //! organized by functional area. None of these are runtime-configurable.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum buffered events on the activity channel
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Capacity of each dispatch lane (normal and low priority)
    pub const DISPATCH_QUEUE_SIZE: usize = 64;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Clock refresh configuration
    pub mod time_refresh {
        use std::time::Duration;

        /// Interval between periodic time-of-day refreshes (seconds).
        /// Matches the clock granularity shown on the dashboard.
        pub const TICK_INTERVAL_SECS: u64 = 30;

        /// Helper function to get the tick interval
        pub const fn tick_interval() -> Duration {
            Duration::from_secs(TICK_INTERVAL_SECS)
        }
    }

    /// Network change detection configuration
    pub mod network_watch {
        use std::time::Duration;

        /// Interval between network configuration samples (milliseconds).
        /// This is the bridge's sampling cadence, not a coalescing window.
        pub const POLL_INTERVAL_MS: u64 = 2_000;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    /// Connected device enumeration configuration
    pub mod device_watch {
        use std::time::Duration;

        /// Interval between peer-device enumerations (milliseconds)
        pub const POLL_INTERVAL_MS: u64 = 5_000;

        /// Helper function to get the poll interval
        pub const fn poll_interval() -> Duration {
            Duration::from_millis(POLL_INTERVAL_MS)
        }
    }

    // =============================================================================
    // POWER ACTION CONFIGURATION
    // =============================================================================

    /// Shutdown sequencing configuration
    pub mod power {
        use std::time::Duration;

        /// Grace delay between arming a power action and the OS call
        /// (milliseconds). Lets a pending UI transition settle first.
        pub const SHUTDOWN_GRACE_MS: u64 = 500;

        /// Helper function to get the grace delay
        pub const fn shutdown_grace() -> Duration {
            Duration::from_millis(SHUTDOWN_GRACE_MS)
        }
    }
}
