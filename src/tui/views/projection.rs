//! Investment parameters and growth projection

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::config::settings::{MAX_RATE_PERCENT, MAX_YEARS, MIN_RATE_PERCENT, MIN_YEARS};
use crate::display::{format_currency, format_gain};
use crate::reports::SavingsReport;
use crate::tui::app::App;

/// Position of `value` between `min` and `max`, for gauges
fn ratio(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Render the rate and horizon controls
pub fn render_parameters(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Investment Parameters ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);

    let rate = app.session.rate_percent();
    let years = app.session.years();

    frame.render_widget(
        Paragraph::new(format!("Annual Return Rate: {}%   (+/-)", rate)),
        rows[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(ratio(rate, MIN_RATE_PERCENT, MAX_RATE_PERCENT))
            .label(format!("{}% - {}%", MIN_RATE_PERCENT, MAX_RATE_PERCENT)),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(format!("Time Horizon: {} Years   ([/])", years)),
        rows[2],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(ratio(
                f64::from(years),
                f64::from(MIN_YEARS),
                f64::from(MAX_YEARS),
            ))
            .label(format!("{} - {} years", MIN_YEARS, MAX_YEARS)),
        rows[3],
    );
}

fn figure_line(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<26}", label), Style::default().fg(Color::White)),
        Span::styled(value, style),
    ])
}

/// Render the growth figures
pub fn render_growth(frame: &mut Frame, app: &App, report: &SavingsReport, area: Rect) {
    let symbol = app.settings.currency_symbol.as_str();
    let money = |amount: f64| format_currency(amount, symbol, 2);

    let block = Block::default()
        .title(" Long-Term Impact ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let lines = vec![
        figure_line(
            "Annual Savings to Invest",
            money(report.totals.total_savings_annual),
            Style::default().fg(Color::Green),
        ),
        figure_line(
            "Total Contributions",
            money(report.projection.total_contributions),
            Style::default().fg(Color::White),
        ),
        figure_line(
            "Investment Gains",
            format_gain(report.projection.investment_gains, symbol),
            Style::default().fg(Color::Green),
        ),
        figure_line(
            &format!("Future Value in {} Years", report.years),
            money(report.projection.future_value),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(Span::styled(
            report.narrative(symbol),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_clamps() {
        assert_eq!(ratio(7.5, 0.0, 15.0), 0.5);
        assert_eq!(ratio(20.0, 0.0, 15.0), 1.0);
        assert_eq!(ratio(-1.0, 0.0, 15.0), 0.0);
        assert_eq!(ratio(1.0, 1.0, 1.0), 0.0);
    }
}
