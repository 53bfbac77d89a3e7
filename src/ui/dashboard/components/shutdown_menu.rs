//! Shutdown selection surface and the armed notice
//!
//! The menu is the only place a power action can originate; its result is
//! handed to the sequencer as a `PowerActionKind` variant.

use super::super::state::{DashboardState, MenuOption};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

/// Center a fixed-size popup inside the frame.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Render the {Shutdown, Restart, Cancel} menu popup.
pub fn render_shutdown_menu(f: &mut Frame, state: &DashboardState) {
    let area = centered_rect(30, (MenuOption::ALL.len() + 4) as u16, f.area());
    f.render_widget(Clear, area);

    let lines: Vec<Line> = MenuOption::ALL
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let selected = state.menu_selection == Some(idx);
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::styled(format!(" {} ", option.label()), style).alignment(Alignment::Center)
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .title("POWER")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightRed))
            .padding(Padding::uniform(1)),
    );
    f.render_widget(menu, area);
}

/// Render the terminal "going down" notice once a power action is armed.
pub fn render_armed_notice(f: &mut Frame, state: &DashboardState) {
    let Some(kind) = state.armed else {
        return;
    };
    let area = centered_rect(40, 5, f.area());
    f.render_widget(Clear, area);

    let notice = Paragraph::new(format!("{} in progress...", kind))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::LightRed))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(notice, area);
}
