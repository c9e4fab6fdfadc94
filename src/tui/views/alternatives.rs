//! Better alternatives view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::{format_amount, format_currency};
use crate::reports::SavingsReport;
use crate::tui::app::App;

/// Render the alternatives table
pub fn render(frame: &mut Frame, app: &App, report: &SavingsReport, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(format!(
            " Better Alternatives │ Total Annual Savings: {} ",
            format_currency(report.totals.total_savings_annual, symbol, 2)
        ))
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if report.alternatives.is_empty() {
        let hint = Paragraph::new("Give an expense a description and a cost to see an alternative.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let widths = [
        Constraint::Length(3),  // #
        Constraint::Length(18), // Original expense
        Constraint::Min(24),    // Suggestion
        Constraint::Length(16), // New cost
        Constraint::Length(16), // Savings
        Constraint::Length(14), // Annual savings
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from("Original Expense").style(bold),
        Cell::from("Better Alternative").style(bold),
        Cell::from("New Cost").style(bold),
        Cell::from("Savings").style(bold),
        Cell::from("Annual Savings").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = report
        .alternatives
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let frequency = row.expense.frequency.as_str();
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.expense.description.clone()),
                Cell::from(row.alternative.suggestion.clone())
                    .style(Style::default().fg(Color::Cyan)),
                Cell::from(format!(
                    "{}{} / {}",
                    symbol,
                    format_amount(row.alternative.new_cost),
                    frequency
                )),
                Cell::from(format!(
                    "-{}{} / {}",
                    symbol,
                    format_amount(row.alternative.savings),
                    frequency
                ))
                .style(Style::default().fg(Color::Green)),
                Cell::from(format_currency(row.alternative.annual_savings, symbol, 2))
                    .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
