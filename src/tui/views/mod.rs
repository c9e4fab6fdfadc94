//! TUI Views module
//!
//! Contains the banner and header, the expense grid, the alternatives table,
//! the projection column and the status bar.

pub mod alternatives;
pub mod comparison;
pub mod expenses;
pub mod header;
pub mod projection;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    // One report per frame; every panel reads from it
    let report = app.report();

    header::render_banner(frame, app, layout.banner);
    header::render_header(frame, layout.header);
    expenses::render(frame, app, &report, layout.expenses);
    alternatives::render(frame, app, &report, layout.alternatives);
    projection::render_parameters(frame, app, layout.parameters);
    projection::render_growth(frame, app, &report, layout.growth);
    comparison::render(frame, app, &report, layout.comparison);
    status_bar::render(frame, app, &report, layout.status_bar);

    // Render dialog if active
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Confirm(message, action) => {
            dialogs::confirm::render(frame, app, message, action)
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::services::Session;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(150, 45)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_example_session() {
        let settings = Settings::default();
        let app = App::new(&settings, Session::default());
        let screen = draw(&app);

        assert!(screen.contains("THE BETTER ALTERNATIVE"));
        assert!(screen.contains("Wealth Building Mastermind"));
        assert!(screen.contains("Daily coffee"));
        assert!(screen.contains("Make at home"));
        assert!(screen.contains("Annual Return Rate: 7%"));
        assert!(screen.contains("Time Horizon: 10 Years"));
        assert!(screen.contains("THE DIFFERENCE"));
    }

    #[test]
    fn test_render_empty_session_and_dialogs() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new(0.0, 1));
        let screen = draw(&app);
        assert!(screen.contains("No expenses. Press 'a' to add one."));

        app.open_dialog(ActiveDialog::Help);
        assert!(draw(&app).contains("Expense Grid"));
    }

    #[test]
    fn test_render_delete_confirmation() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.request_delete();

        let screen = draw(&app);
        assert!(screen.contains("Delete Expense"));
        assert!(screen.contains("$2,190.00 a year, paid daily"));
        assert!(screen.contains("Drops $1,642.50 a year from your savings"));
        assert!(screen.contains("Keep it"));
    }
}
