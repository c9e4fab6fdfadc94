//! Banner and title header

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the banner line, or its editor while it is being edited
pub fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    if app.input_mode == InputMode::EditingBanner {
        frame.render_widget(app.input.clone(), area);
        return;
    }

    let message = app.banner.trim();
    if message.is_empty() {
        return;
    }

    let banner = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(banner, area);
}

/// Render the title header
pub fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "THE BETTER ALTERNATIVE",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Financial Optimization Calculator",
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(Span::styled(
            "Find smarter alternatives for your daily expenses and see the long-term impact.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
