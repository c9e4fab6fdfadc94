//! Expense grid view
//!
//! One row per expense with its annual cost. The selected cell is
//! highlighted, and while editing the cell editor sits under the table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::display::format_currency;
use crate::models::ExpenseField;
use crate::reports::SavingsReport;
use crate::tui::app::{App, InputMode};

/// Render the expense grid
pub fn render(frame: &mut Frame, app: &App, report: &SavingsReport, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let editing = app.input_mode == InputMode::Editing;

    let block = Block::default()
        .title(format!(
            " Your Current Expenses │ Total Annual Cost: {} ",
            format_currency(report.totals.total_current_annual, symbol, 2)
        ))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(if editing { 1 } else { 0 }),
        ])
        .split(inner);

    if report.expenses.is_empty() {
        let hint = ratatui::widgets::Paragraph::new("No expenses. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[0]);
        return;
    }

    let widths = [
        Constraint::Length(3),  // #
        Constraint::Length(14), // Category
        Constraint::Min(18),    // Description
        Constraint::Length(10), // Cost
        Constraint::Length(9),  // Frequency
        Constraint::Length(14), // Annual cost
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(bold),
        Cell::from(ExpenseField::Category.label()).style(bold),
        Cell::from(ExpenseField::Description.label()).style(bold),
        Cell::from(ExpenseField::CurrentCost.label()).style(bold),
        Cell::from(ExpenseField::Frequency.label()).style(bold),
        Cell::from("Annual Cost").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let selected_cell = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Row> = report
        .expenses
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let expense = &row.expense;
            let cost = if expense.current_cost == 0.0 {
                String::new()
            } else {
                format!("{:.2}", expense.current_cost)
            };

            let fields = [
                (ExpenseField::Category, expense.category.clone()),
                (ExpenseField::Description, expense.description.clone()),
                (ExpenseField::CurrentCost, cost),
                (ExpenseField::Frequency, expense.frequency.to_string()),
            ];

            let mut cells = vec![Cell::from(format!("{}", i + 1))
                .style(Style::default().fg(Color::DarkGray))];
            for (field, text) in fields {
                let cell = Cell::from(text);
                if i == app.selected_index && field == app.selected_field {
                    cells.push(cell.style(selected_cell));
                } else {
                    cells.push(cell);
                }
            }
            cells.push(
                Cell::from(format_currency(row.annual_cost, symbol, 2))
                    .style(Style::default().fg(Color::Red)),
            );

            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, chunks[0], &mut state);

    if editing {
        frame.render_widget(app.input.clone(), chunks[1]);
    }
}
