//! Dashboard presentation state
//!
//! State that belongs to the terminal view, not to the snapshot: the
//! activity log, animation tick, and the shutdown menu. The displayed
//! values themselves live in `DashboardSnapshot`, owned by the
//! orchestrator.

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::providers::PowerActionKind;
use std::collections::VecDeque;

/// An entry in the shutdown selection surface. The chosen entry is turned
/// into a `PowerActionKind` right here, at the call site; the sequencer
/// never sees menu labels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuOption {
    Shutdown,
    Restart,
    Cancel,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Shutdown, MenuOption::Restart, MenuOption::Cancel];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Shutdown => "Shutdown",
            MenuOption::Restart => "Restart",
            MenuOption::Cancel => "Cancel",
        }
    }

    /// The power action this entry requests, if any.
    pub fn action(&self) -> Option<PowerActionKind> {
        match self {
            MenuOption::Shutdown => Some(PowerActionKind::Shutdown),
            MenuOption::Restart => Some(PowerActionKind::Restart),
            MenuOption::Cancel => None,
        }
    }
}

/// Terminal-side dashboard state.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,
    /// Selected index while the shutdown menu is open
    pub menu_selection: Option<usize>,
    /// The armed power action, once the sequencer has one
    pub armed: Option<PowerActionKind>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the animation tick.
    pub fn update(&mut self) {
        self.tick += 1;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn menu_is_open(&self) -> bool {
        self.menu_selection.is_some()
    }

    pub fn open_shutdown_menu(&mut self) {
        self.menu_selection = Some(0);
    }

    pub fn close_shutdown_menu(&mut self) {
        self.menu_selection = None;
    }

    /// Move the menu selection, clamped to the option list.
    pub fn menu_move(&mut self, delta: isize) {
        if let Some(selected) = self.menu_selection {
            let last = MenuOption::ALL.len() as isize - 1;
            let next = (selected as isize + delta).clamp(0, last);
            self.menu_selection = Some(next as usize);
        }
    }

    pub fn selected_option(&self) -> Option<MenuOption> {
        self.menu_selection.map(|idx| MenuOption::ALL[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventType;
    use crate::logging::LogLevel;

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = DashboardState::new();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::orchestrator(
                format!("event {}", i),
                EventType::Refresh,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        // Oldest entries were evicted first.
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }

    #[test]
    fn test_menu_navigation_clamps() {
        let mut state = DashboardState::new();
        assert!(!state.menu_is_open());

        state.open_shutdown_menu();
        assert_eq!(state.selected_option(), Some(MenuOption::Shutdown));

        state.menu_move(-1);
        assert_eq!(state.selected_option(), Some(MenuOption::Shutdown));

        state.menu_move(1);
        state.menu_move(1);
        state.menu_move(1);
        assert_eq!(state.selected_option(), Some(MenuOption::Cancel));

        state.close_shutdown_menu();
        assert_eq!(state.selected_option(), None);
    }

    #[test]
    // The selection surface maps entries to variants, never to labels.
    fn test_menu_options_map_to_power_actions() {
        assert_eq!(
            MenuOption::Shutdown.action(),
            Some(PowerActionKind::Shutdown)
        );
        assert_eq!(MenuOption::Restart.action(), Some(PowerActionKind::Restart));
        assert_eq!(MenuOption::Cancel.action(), None);
    }
}
