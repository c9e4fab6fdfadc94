//! Savings aggregation
//!
//! Sums annualized costs and savings across a whole expense list.

use serde::{Deserialize, Serialize};

use crate::models::{Alternative, Expense};

/// Yearly totals for a set of expenses and their alternatives
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Annualized cost of every expense, eligible or not
    pub total_current_annual: f64,
    /// Annualized savings across all alternatives
    pub total_savings_annual: f64,
    /// Annualized cost after switching to the alternatives
    pub total_new_annual: f64,
}

/// Aggregate yearly totals.
///
/// The current total covers every expense, including ones without an
/// alternative. The savings total only covers the alternatives passed in.
pub fn aggregate(expenses: &[Expense], alternatives: &[Alternative]) -> Totals {
    let total_current_annual: f64 = expenses.iter().map(Expense::annual_cost).sum();
    let total_savings_annual: f64 = alternatives.iter().map(|a| a.annual_savings).sum();

    Totals {
        total_current_annual,
        total_savings_annual,
        total_new_annual: total_current_annual - total_savings_annual,
    }
}
