//! Dashboard connected devices panel

use crate::snapshot::DashboardSnapshot;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the peer device list, in enumeration order.
pub fn render_devices_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    snapshot: &DashboardSnapshot,
) {
    let device_lines: Vec<Line> = if snapshot.connected_devices.is_empty() {
        vec![Line::from(Span::styled(
            "No devices attached",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        snapshot
            .connected_devices
            .iter()
            .map(|device| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", device.id),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(device.name.clone(), Style::default().fg(Color::LightYellow)),
                ])
            })
            .collect()
    };

    let devices_block = Block::default()
        .title("CONNECTED DEVICES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let devices_paragraph = Paragraph::new(device_lines)
        .block(devices_block)
        .wrap(Wrap { trim: true });
    f.render_widget(devices_paragraph, area);
}
