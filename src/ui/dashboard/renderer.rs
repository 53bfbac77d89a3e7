//! Dashboard main renderer

use super::components::{
    board_panel, devices_panel, footer, header, logs, network_panel, shutdown_menu,
};
use super::state::DashboardState;
use crate::snapshot::DashboardSnapshot;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState, snapshot: &DashboardSnapshot) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], snapshot);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    board_panel::render_board_panel(f, content_chunks[0], snapshot);
    network_panel::render_network_panel(f, content_chunks[1], snapshot);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[2]);

    devices_panel::render_devices_panel(f, bottom_chunks[0], snapshot);
    logs::render_logs_panel(f, bottom_chunks[1], state);

    footer::render_footer(f, main_chunks[3], state);

    // Overlays come last so they sit on top of the panels.
    if state.menu_is_open() {
        shutdown_menu::render_shutdown_menu(f, state);
    }
    if state.armed.is_some() {
        shutdown_menu::render_armed_notice(f, state);
    }
}
