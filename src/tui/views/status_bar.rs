//! Status bar view
//!
//! Shows the expense count, yearly savings, the last status message and key
//! hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_currency;
use crate::reports::SavingsReport;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, report: &SavingsReport, area: Rect) {
    let mut spans = vec![];

    let mode = match app.input_mode {
        InputMode::Normal => " NORMAL ",
        InputMode::Editing => " EDIT ",
        InputMode::EditingBanner => " BANNER ",
    };
    spans.push(Span::styled(
        mode,
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(format!(" {} expenses", report.expenses.len())));
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!(
            "Saves {}/yr",
            format_currency(
                report.totals.total_savings_annual,
                &app.settings.currency_symbol,
                2
            )
        ),
        Style::default().fg(Color::Green),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Normal => " a:Add  d:Delete  Enter:Edit  x:Export  q:Quit  ?:Help ",
        InputMode::Editing => " Enter:Save  Tab:Next  Esc:Cancel ",
        InputMode::EditingBanner => " Enter:Save  Esc:Cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
