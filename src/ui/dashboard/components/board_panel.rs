//! Dashboard board identity panel
//!
//! Renders the board name, image reference, and OS version

use crate::snapshot::DashboardSnapshot;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the board identity panel.
pub fn render_board_panel(f: &mut Frame, area: ratatui::layout::Rect, snapshot: &DashboardSnapshot) {
    let info_lines = vec![
        Line::from(vec![Span::styled(
            format!("Board: {}", snapshot.board_name),
            Style::default().fg(Color::LightBlue),
        )]),
        Line::from(vec![Span::styled(
            format!("Image: {}", snapshot.board_image.0),
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            format!("OS version: {}", snapshot.os_version),
            Style::default().fg(Color::Cyan),
        )]),
        Line::from(vec![Span::styled(
            format!("Device name: {}", snapshot.device_name),
            Style::default().fg(Color::LightYellow),
        )]),
    ];

    let info_block = Block::default()
        .title("BOARD INFO")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let info_paragraph = Paragraph::new(info_lines)
        .block(info_block)
        .wrap(Wrap { trim: true });
    f.render_widget(info_paragraph, area);
}
