//! Savings vs loss comparison

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::display::{format_currency, format_gain};
use crate::reports::SavingsReport;
use crate::tui::app::App;

/// Render the path comparison
pub fn render(frame: &mut Frame, app: &App, report: &SavingsReport, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let comparison = &report.comparison;
    let heading = |text: &str, color: Color| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    };

    let block = Block::default()
        .title(" Savings vs Loss ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        heading("CURRENT PATH (No Changes)", Color::Red),
        Line::from(format!(
            "Spent over {} years: {}",
            report.years,
            format_currency(comparison.current_path_total, symbol, 2)
        )),
        Line::from(Span::styled(
            "Money gone forever - no investment growth",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        heading("BETTER PATH (With Alternatives)", Color::Green),
        Line::from(format!(
            "Spent over {} years: {}",
            report.years,
            format_currency(comparison.better_path_spent, symbol, 2)
        )),
        Line::from(format!(
            "Plus investment growth: {}",
            format_gain(comparison.better_path_growth, symbol)
        )),
        Line::from(Span::styled(
            format!("{} better off", format_currency(comparison.net_position, symbol, 0)),
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "THE DIFFERENCE: ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_currency(comparison.difference, symbol, 0),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "That's what making better choices is worth in {} years",
                report.years
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
