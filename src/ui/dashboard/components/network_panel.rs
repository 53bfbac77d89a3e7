//! Dashboard network panel
//!
//! Renders the connection summary and the adapter table

use crate::snapshot::DashboardSnapshot;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table};

/// Render the network panel: summary on top, adapters below.
pub fn render_network_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    snapshot: &DashboardSnapshot,
) {
    let network_block = Block::default()
        .title("NETWORK")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    let inner = network_block.inner(area);
    f.render_widget(network_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(inner);

    let connected = snapshot.network_name != crate::snapshot::NOT_CONNECTED;
    let network_color = if connected {
        Color::LightGreen
    } else {
        Color::LightRed
    };
    let summary = vec![
        Line::from(vec![
            Span::styled("Network: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.network_name.clone(),
                Style::default()
                    .fg(network_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("IPv4: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.ipv4_address.clone(),
                Style::default().fg(Color::LightCyan),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(summary), chunks[0]);

    // Adapter table, in provider order
    let rows: Vec<Row> = snapshot
        .network_adapters
        .iter()
        .map(|adapter| {
            Row::new(vec![
                Cell::from(adapter.name.clone()),
                Cell::from(adapter.ipv4.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(adapter.mac.clone().unwrap_or_else(|| "-".to_string())),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ],
    )
    .header(
        Row::new(vec!["Adapter", "IPv4", "MAC"]).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
    );
    f.render_widget(table, chunks[1]);
}
