//! Interactive session state
//!
//! A session exclusively owns the expense list and the two projection
//! parameters. All mutation goes through explicit operations keyed by expense
//! id; every derived figure is recomputed from scratch on request.

use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{AltError, AltResult};
use crate::models::{Alternative, Expense, ExpenseId, ExpenseUpdate, Frequency};
use crate::reports::SavingsReport;

use super::aggregator::{aggregate, Totals};
use super::projector::{project, Projection};
use super::recommender::recommend_all;

/// Default annual return rate, in percent
pub const DEFAULT_RATE_PERCENT: f64 = 7.0;

/// Default time horizon, in years
pub const DEFAULT_YEARS: u32 = 10;

/// The example expenses a fresh session starts with
pub fn example_expenses() -> Vec<Expense> {
    vec![
        Expense::new("Food", "Daily coffee", 6.0, Frequency::Daily),
        Expense::new("Transport", "Uber to work", 25.0, Frequency::Daily),
        Expense::new("Subscription", "Streaming services", 45.0, Frequency::Monthly),
    ]
}

/// One user's working set of expenses and projection parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    expenses: Vec<Expense>,
    rate_percent: f64,
    years: u32,
}

impl Session {
    /// Create an empty session
    pub fn new(rate_percent: f64, years: u32) -> Self {
        Self {
            expenses: Vec::new(),
            rate_percent,
            years,
        }
    }

    /// Create a session seeded with the example expenses
    pub fn with_examples(rate_percent: f64, years: u32) -> Self {
        Self {
            expenses: example_expenses(),
            rate_percent,
            years,
        }
    }

    /// Create a session from the user's settings
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.seed_examples {
            Self::with_examples(settings.default_rate_percent, settings.default_years)
        } else {
            Self::new(settings.default_rate_percent, settings.default_years)
        }
    }

    /// The expenses, in entry order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Index of an expense in entry order
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the session has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Annual return rate, in percent
    pub fn rate_percent(&self) -> f64 {
        self.rate_percent
    }

    /// Time horizon, in years
    pub fn years(&self) -> u32 {
        self.years
    }

    /// Set the annual return rate. The value is stored as given.
    pub fn set_rate_percent(&mut self, rate_percent: f64) {
        debug!(rate_percent, "rate changed");
        self.rate_percent = rate_percent;
    }

    /// Set the time horizon. The value is stored as given.
    pub fn set_years(&mut self, years: u32) {
        debug!(years, "horizon changed");
        self.years = years;
    }

    /// Append a blank expense and return its id
    pub fn add_expense(&mut self) -> ExpenseId {
        let expense = Expense::blank();
        let id = expense.id;
        debug!(%id, "added blank expense");
        self.expenses.push(expense);
        id
    }

    /// Append an existing expense
    pub fn add(&mut self, expense: Expense) -> AltResult<ExpenseId> {
        if self.get(expense.id).is_some() {
            return Err(AltError::Duplicate {
                entity_type: "Expense",
                identifier: expense.id.to_string(),
            });
        }

        let id = expense.id;
        debug!(%id, description = %expense.description, "added expense");
        self.expenses.push(expense);
        Ok(id)
    }

    /// Append several expenses, giving each a fresh id
    pub fn extend(&mut self, expenses: impl IntoIterator<Item = Expense>) {
        for mut expense in expenses {
            expense.id = ExpenseId::new();
            self.expenses.push(expense);
        }
    }

    /// Change one field of an expense
    pub fn update_expense(&mut self, id: ExpenseId, update: ExpenseUpdate) -> AltResult<()> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AltError::expense_not_found(id.to_string()))?;

        debug!(%id, field = ?update.field(), "updated expense");
        expense.apply(update);
        Ok(())
    }

    /// Remove an expense, returning it
    pub fn delete_expense(&mut self, id: ExpenseId) -> AltResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| AltError::expense_not_found(id.to_string()))?;

        debug!(%id, "deleted expense");
        Ok(self.expenses.remove(index))
    }

    /// Alternatives for every eligible expense
    pub fn alternatives(&self) -> Vec<Alternative> {
        recommend_all(&self.expenses)
    }

    /// Yearly totals
    pub fn totals(&self) -> Totals {
        aggregate(&self.expenses, &self.alternatives())
    }

    /// Growth projection of the yearly savings
    pub fn projection(&self) -> Projection {
        project(self.totals().total_savings_annual, self.rate_percent, self.years)
    }

    /// The full savings report
    pub fn report(&self) -> SavingsReport {
        SavingsReport::generate(&self.expenses, self.rate_percent, self.years)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_examples(DEFAULT_RATE_PERCENT, DEFAULT_YEARS)
    }
}
