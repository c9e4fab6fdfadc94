//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::EditingBanner => handle_banner_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        // Global
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('b') => app.begin_banner_edit(),
        KeyCode::Char('x') => {
            if let Err(e) = app.export_report() {
                tracing::warn!(error = %e, "export failed");
                app.set_status(e.to_string());
            }
        }

        // Expense grid
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => app.next_field(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => app.prev_field(),
        KeyCode::Enter | KeyCode::Char('e') => app.activate_cell(),
        KeyCode::Char(' ') | KeyCode::Char('f') => app.cycle_frequency(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.add_expense(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        // Parameters
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_rate(1),
        KeyCode::Char('-') => app.adjust_rate(-1),
        KeyCode::Char(']') => app.adjust_years(1),
        KeyCode::Char('[') => app.adjust_years(-1),

        _ => {}
    }
}

/// Handle keys while a cell is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => commit(app),
        KeyCode::Tab => {
            commit(app);
            app.next_field();
            app.begin_edit();
        }
        KeyCode::Char(c) => app.input.insert(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }
}

/// Handle keys while the banner is being edited
fn handle_banner_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_banner_edit(),
        KeyCode::Char(c) => app.input.insert(c),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        _ => {}
    }
}

fn commit(app: &mut App) {
    if let Err(e) = app.commit_edit() {
        tracing::warn!(error = %e, "edit rejected");
        app.set_status(e.to_string());
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::Confirm(_, action) => {
            let action = *action;
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.close_dialog();
                    if let Err(e) = app.execute(action) {
                        app.set_status(e.to_string());
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{ExpenseField, Frequency};
    use crate::services::Session;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new(&settings, Session::default());
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_and_fill_expense() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::new(7.0, 10));

        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Fitness");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Gym membership");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "50");
        press(&mut app, KeyCode::Enter);

        let expense = &app.session.expenses()[0];
        assert_eq!(expense.category, "Fitness");
        assert_eq!(expense.description, "Gym membership");
        assert_eq!(expense.current_cost, 50.0);
        assert_eq!(app.selected_field, ExpenseField::CurrentCost);

        let alternatives = app.session.alternatives();
        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].suggestion, "Home equipment or outdoor workouts");
    }

    #[test]
    fn test_tab_from_cost_keeps_frequency() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_field = ExpenseField::CurrentCost;

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);

        let expense = &app.session.expenses()[0];
        assert_eq!(app.selected_field, ExpenseField::Frequency);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(expense.frequency, Frequency::Daily);
        assert_eq!(expense.current_cost, 6.0);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.expenses()[0].frequency, Frequency::Weekly);
    }

    #[test]
    fn test_letters_while_editing_do_not_trigger_commands() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_field = ExpenseField::Description;

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, " qdx");
        assert!(!app.should_quit);
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.expenses()[0].description, "Daily coffee");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());

        press(&mut app, KeyCode::Char('d'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.len(), 3);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.session.len(), 2);
        assert_eq!(app.session.expenses()[0].description, "Uber to work");
    }

    #[test]
    fn test_parameter_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());

        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('+'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.session.rate_percent(), 7.5);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.session.years(), 11);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.session.years(), 9);
    }

    #[test]
    fn test_cycle_frequency_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_index = 2;

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.expenses()[2].frequency, Frequency::Yearly);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.session.expenses()[2].frequency, Frequency::Daily);
    }

    #[test]
    fn test_banner_key_edits_banner() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());

        press(&mut app, KeyCode::Char('b'));
        for _ in 0..app.banner.chars().count() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "Free coaching call");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.banner, "Free coaching call");
        assert!(!app.should_quit);
        assert_eq!(app.session.len(), 3);

        press(&mut app, KeyCode::Char('b'));
        type_text(&mut app, "!!!");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.banner, "Free coaching call");
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('j'));
        assert!(!app.has_dialog());
        assert_eq!(app.selected_index, 0);
    }
}
