//! Application state for the TUI
//!
//! The App struct owns the session and holds all state needed for rendering
//! and handling events. Every figure on screen is derived from the session
//! when a frame is drawn.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::{
    Settings, MAX_RATE_PERCENT, MAX_YEARS, MIN_RATE_PERCENT, MIN_YEARS, RATE_STEP,
};
use crate::error::{AltError, AltResult};
use crate::export::export_scenario_json;
use crate::models::{Expense, ExpenseField, ExpenseId, ExpenseUpdate};
use crate::reports::SavingsReport;
use crate::services::Session;

use super::widgets::TextInput;

/// File the export key writes to, relative to the working directory
pub const DEFAULT_EXPORT_FILE: &str = "betteralt-report.json";

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    EditingBanner,
}

/// An action waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    DeleteExpense(ExpenseId),
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(String, PendingAction),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The expenses and projection parameters being worked on
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expense grid
    pub selected_index: usize,

    /// Selected column in the expense grid
    pub selected_field: ExpenseField,

    /// Cell editor
    pub input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    /// Where the export key writes
    pub export_path: PathBuf,

    /// Banner text, editable for this session only
    pub banner: String,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, session: Session) -> Self {
        Self {
            settings,
            session,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            selected_field: ExpenseField::Category,
            input: TextInput::new(),
            status_message: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            banner: settings.banner_message.clone(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// The full report for the current session
    pub fn report(&self) -> SavingsReport {
        self.session.report()
    }

    /// The expense under the cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.session.expenses().get(self.selected_index)
    }

    fn clamp_selection(&mut self) {
        let len = self.session.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.session.len() {
            self.selected_index += 1;
        }
    }

    /// Select the next column, wrapping around
    pub fn next_field(&mut self) {
        let index = field_index(self.selected_field);
        self.selected_field = ExpenseField::ALL[(index + 1) % ExpenseField::ALL.len()];
    }

    /// Select the previous column, wrapping around
    pub fn prev_field(&mut self) {
        let len = ExpenseField::ALL.len();
        let index = field_index(self.selected_field);
        self.selected_field = ExpenseField::ALL[(index + len - 1) % len];
    }

    /// Append a blank expense and select it
    pub fn add_expense(&mut self) {
        self.session.add_expense();
        self.selected_index = self.session.len() - 1;
        self.selected_field = ExpenseField::Category;
        self.set_status("Added expense");
    }

    /// Ask before deleting the selected expense
    pub fn request_delete(&mut self) {
        let Some(expense) = self.selected_expense() else {
            self.set_status("No expense selected");
            return;
        };

        let label = if expense.description.is_empty() {
            format!("row {}", self.selected_index + 1)
        } else {
            format!("'{}'", expense.description)
        };
        let action = PendingAction::DeleteExpense(expense.id);
        self.open_dialog(ActiveDialog::Confirm(format!("Delete {}?", label), action));
    }

    /// Run a confirmed action
    pub fn execute(&mut self, action: PendingAction) -> AltResult<()> {
        match action {
            PendingAction::DeleteExpense(id) => {
                let removed = self.session.delete_expense(id)?;
                self.clamp_selection();
                let name = if removed.description.is_empty() {
                    "expense".to_string()
                } else {
                    removed.description
                };
                self.set_status(format!("Deleted {}", name));
            }
        }
        Ok(())
    }

    /// Act on the selected cell: frequency cycles, the other cells open the editor
    pub fn activate_cell(&mut self) {
        if self.selected_field == ExpenseField::Frequency {
            self.cycle_frequency();
        } else {
            self.begin_edit();
        }
    }

    /// Start editing the selected cell. Frequency is not a text cell and
    /// leaves the grid in normal mode.
    pub fn begin_edit(&mut self) {
        let Some(expense) = self.selected_expense() else {
            return;
        };

        let current = match self.selected_field {
            ExpenseField::Category => expense.category.clone(),
            ExpenseField::Description => expense.description.clone(),
            ExpenseField::CurrentCost if expense.current_cost == 0.0 => String::new(),
            ExpenseField::CurrentCost => expense.current_cost.to_string(),
            ExpenseField::Frequency => return,
        };

        self.input = TextInput::new()
            .label(self.selected_field.label())
            .content(current)
            .focused(true);
        self.input_mode = InputMode::Editing;
    }

    /// Write the editor's text into the selected cell
    pub fn commit_edit(&mut self) -> AltResult<()> {
        self.input_mode = InputMode::Normal;
        let id = self
            .selected_expense()
            .map(|e| e.id)
            .ok_or_else(|| AltError::Tui("No expense selected".into()))?;

        let update = ExpenseUpdate::from_input(self.selected_field, self.input.value());
        self.session.update_expense(id, update)?;
        self.input.clear();
        Ok(())
    }

    /// Leave the editor without changing anything
    pub fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    /// Open the editor on the banner text
    pub fn begin_banner_edit(&mut self) {
        self.input = TextInput::new()
            .label("Banner")
            .content(self.banner.clone())
            .focused(true);
        self.input_mode = InputMode::EditingBanner;
    }

    /// Replace the banner with the editor's text. Settings are untouched.
    pub fn commit_banner_edit(&mut self) {
        self.banner = self.input.value().trim().to_string();
        self.input_mode = InputMode::Normal;
        self.input.clear();
        tracing::debug!(banner = %self.banner, "banner edited");
    }

    /// Advance the selected expense to the next frequency
    pub fn cycle_frequency(&mut self) {
        let Some(expense) = self.selected_expense() else {
            return;
        };
        let id = expense.id;
        let next = expense.frequency.next();

        if self
            .session
            .update_expense(id, ExpenseUpdate::Frequency(next))
            .is_ok()
        {
            self.set_status(format!("Frequency: {}", next));
        }
    }

    /// Change the return rate by `steps` increments, within the control bounds
    pub fn adjust_rate(&mut self, steps: i32) {
        let target = self.session.rate_percent() + f64::from(steps) * RATE_STEP;
        let snapped = (target / RATE_STEP).round() * RATE_STEP;
        let rate = snapped.clamp(MIN_RATE_PERCENT, MAX_RATE_PERCENT);
        self.session.set_rate_percent(rate);
    }

    /// Change the horizon by `delta` years, within the control bounds
    pub fn adjust_years(&mut self, delta: i32) {
        let target = i64::from(self.session.years()) + i64::from(delta);
        let years = target.clamp(i64::from(MIN_YEARS), i64::from(MAX_YEARS));
        self.session.set_years(years as u32);
    }

    /// Write the scenario to the export file
    pub fn export_report(&mut self) -> AltResult<()> {
        let file = File::create(&self.export_path).map_err(|e| {
            AltError::Export(format!(
                "Failed to create file {}: {}",
                self.export_path.display(),
                e
            ))
        })?;
        let mut writer = BufWriter::new(file);
        export_scenario_json(&self.session, &mut writer, true)?;
        writer
            .flush()
            .map_err(|e| AltError::Export(e.to_string()))?;

        tracing::info!(path = %self.export_path.display(), "exported report");
        self.set_status(format!("Exported to {}", self.export_path.display()));
        Ok(())
    }
}

fn field_index(field: ExpenseField) -> usize {
    ExpenseField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use tempfile::TempDir;

    #[test]
    fn test_navigation_bounds() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());

        app.move_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 2);

        app.prev_field();
        assert_eq!(app.selected_field, ExpenseField::Frequency);
        app.next_field();
        assert_eq!(app.selected_field, ExpenseField::Category);
    }

    #[test]
    fn test_edit_cost_cell() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_field = ExpenseField::CurrentCost;

        app.begin_edit();
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.input.value(), "6");

        app.input.backspace();
        app.input.insert('4');
        app.commit_edit().unwrap();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.expenses()[0].current_cost, 4.0);
    }

    #[test]
    fn test_non_numeric_cost_becomes_zero() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_field = ExpenseField::CurrentCost;

        app.begin_edit();
        app.input.set_content("abc");
        app.commit_edit().unwrap();
        assert_eq!(app.session.expenses()[0].current_cost, 0.0);
        assert_eq!(app.session.alternatives().len(), 2);
    }

    #[test]
    fn test_frequency_column_cycles() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_field = ExpenseField::Frequency;

        app.activate_cell();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.expenses()[0].frequency, Frequency::Weekly);
    }

    #[test]
    fn test_begin_edit_leaves_frequency_alone() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_field = ExpenseField::Frequency;

        app.begin_edit();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.expenses()[0].frequency, Frequency::Daily);
    }

    #[test]
    fn test_banner_edit_is_session_only() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        assert_eq!(app.banner, settings.banner_message);

        app.begin_banner_edit();
        assert_eq!(app.input_mode, InputMode::EditingBanner);
        app.input.set_content("  Budget night on Friday ");
        app.commit_banner_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.banner, "Budget night on Friday");
        assert_eq!(settings.banner_message, Settings::default().banner_message);
    }

    #[test]
    fn test_delete_flow() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.selected_index = 2;

        app.request_delete();
        let ActiveDialog::Confirm(message, action) = app.active_dialog.clone() else {
            panic!("expected confirm dialog");
        };
        assert!(message.contains("Streaming services"));

        app.close_dialog();
        app.execute(action).unwrap();
        assert_eq!(app.session.len(), 2);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_parameter_bounds() {
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());

        app.adjust_rate(1);
        assert_eq!(app.session.rate_percent(), 7.5);
        app.adjust_rate(100);
        assert_eq!(app.session.rate_percent(), 15.0);
        app.adjust_rate(-100);
        assert_eq!(app.session.rate_percent(), 0.0);

        app.adjust_years(-100);
        assert_eq!(app.session.years(), 1);
        app.adjust_years(100);
        assert_eq!(app.session.years(), 30);
    }

    #[test]
    fn test_export_report() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&settings, Session::default());
        app.export_path = temp_dir.path().join("report.json");

        app.export_report().unwrap();
        let contents = std::fs::read_to_string(&app.export_path).unwrap();
        assert!(contents.contains("\"schema_version\""));
        assert!(app.status_message.unwrap().contains("report.json"));
    }
}
