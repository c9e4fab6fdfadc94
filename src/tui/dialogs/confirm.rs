//! Delete confirmation dialog
//!
//! Shows what removing the expense takes out of the totals before asking.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_currency;
use crate::tui::app::{App, PendingAction};
use crate::tui::layout::centered_rect_fixed;

/// Lines describing what the pending action changes
fn impact_lines(app: &App, action: &PendingAction) -> Vec<Line<'static>> {
    let symbol = app.settings.currency_symbol.as_str();

    match action {
        PendingAction::DeleteExpense(id) => {
            let Some(expense) = app.session.expenses().iter().find(|e| e.id == *id) else {
                return vec![];
            };

            let mut lines = vec![Line::from(Span::styled(
                format!(
                    "{} a year, paid {}",
                    format_currency(expense.frequency.annualize(expense.current_cost), symbol, 2),
                    expense.frequency.as_str()
                ),
                Style::default().fg(Color::Red),
            ))];

            if let Some(alternative) = app
                .session
                .alternatives()
                .into_iter()
                .find(|a| a.expense_id == *id)
            {
                lines.push(Line::from(Span::styled(
                    format!(
                        "Drops {} a year from your savings",
                        format_currency(alternative.annual_savings, symbol, 2)
                    ),
                    Style::default().fg(Color::Green),
                )));
            }
            lines
        }
    }
}

/// Render the confirmation dialog for `action`
pub fn render(frame: &mut Frame, app: &App, message: &str, action: &PendingAction) {
    let area = centered_rect_fixed(54, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Expense ")
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let mut lines = vec![Line::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(impact_lines(app, action));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("y/Enter", Style::default().fg(Color::Red)),
        Span::raw(" Delete   "),
        Span::styled("n/Esc", Style::default().fg(Color::Green)),
        Span::raw(" Keep it"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
