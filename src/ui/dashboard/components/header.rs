//! Dashboard header component
//!
//! Renders the title line and the board clock

use crate::snapshot::DashboardSnapshot;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and current time.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, snapshot: &DashboardSnapshot) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("BOARDWATCH v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Clock line: board identity on the left, time of day on the right
    let clock_line = Line::from(vec![
        Span::styled(
            snapshot.board_name.clone(),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("   "),
        Span::styled(
            snapshot.current_time.clone(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let clock = Paragraph::new(clock_line).alignment(Alignment::Center);
    f.render_widget(clock, header_chunks[1]);
}
