//! Savings Report
//!
//! Bundles everything derived from one expense list and one pair of
//! projection parameters: annualized expense rows, the recommended
//! alternatives, yearly totals, the growth projection and the comparison of
//! the current path against the better one.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::display::{
    double_separator, format_amount, format_bar, format_currency, format_gain, format_percentage,
    format_section, separator, truncate,
};
use crate::error::{AltError, AltResult};
use crate::models::{Alternative, Expense};
use crate::services::aggregator::{aggregate, Totals};
use crate::services::projector::{project, Projection};
use crate::services::recommender::recommend_all;

const REPORT_WIDTH: usize = 80;

/// An expense with its yearly cost
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub expense: Expense,
    pub annual_cost: f64,
}

/// An alternative joined to the expense it replaces
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeRow {
    pub expense: Expense,
    pub alternative: Alternative,
}

/// Spending on the current path against the better path over the horizon
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PathComparison {
    /// Everything spent if nothing changes
    pub current_path_total: f64,
    /// Everything spent after switching to the alternatives
    pub better_path_spent: f64,
    /// Future value of investing the savings
    pub better_path_growth: f64,
    /// Growth less the spending avoided over the horizon
    pub net_position: f64,
    /// Growth plus the spending avoided over the horizon
    pub difference: f64,
}

impl PathComparison {
    /// Compare both paths over `years`
    pub fn new(totals: &Totals, projection: &Projection, years: u32) -> Self {
        let years = f64::from(years);
        let avoided = (totals.total_current_annual - totals.total_new_annual) * years;

        Self {
            current_path_total: totals.total_current_annual * years,
            better_path_spent: totals.total_new_annual * years,
            better_path_growth: projection.future_value,
            net_position: projection.future_value - avoided,
            difference: projection.future_value + avoided,
        }
    }
}

/// Savings Report
#[derive(Debug, Clone, PartialEq)]
pub struct SavingsReport {
    /// Annual return rate, in percent
    pub rate_percent: f64,
    /// Time horizon, in years
    pub years: u32,
    /// Every expense, in entry order
    pub expenses: Vec<ExpenseRow>,
    /// Alternatives for the eligible expenses, in entry order
    pub alternatives: Vec<AlternativeRow>,
    /// Yearly totals
    pub totals: Totals,
    /// Growth of the yearly savings
    pub projection: Projection,
    /// Current path against better path
    pub comparison: PathComparison,
}

impl SavingsReport {
    /// Generate a savings report
    pub fn generate(expenses: &[Expense], rate_percent: f64, years: u32) -> Self {
        let alternatives = recommend_all(expenses);
        let totals = aggregate(expenses, &alternatives);
        let projection = project(totals.total_savings_annual, rate_percent, years);
        let comparison = PathComparison::new(&totals, &projection, years);

        let alternative_rows = alternatives
            .into_iter()
            .filter_map(|alternative| {
                expenses
                    .iter()
                    .find(|e| e.id == alternative.expense_id)
                    .map(|expense| AlternativeRow {
                        expense: expense.clone(),
                        alternative,
                    })
            })
            .collect();

        let expense_rows = expenses
            .iter()
            .map(|expense| ExpenseRow {
                annual_cost: expense.annual_cost(),
                expense: expense.clone(),
            })
            .collect();

        Self {
            rate_percent,
            years,
            expenses: expense_rows,
            alternatives: alternative_rows,
            totals,
            projection,
            comparison,
        }
    }

    /// The bare alternatives, without their expenses
    pub fn alternative_list(&self) -> Vec<Alternative> {
        self.alternatives
            .iter()
            .map(|row| row.alternative.clone())
            .collect()
    }

    /// The bare expenses
    pub fn expense_list(&self) -> Vec<Expense> {
        self.expenses.iter().map(|row| row.expense.clone()).collect()
    }

    /// One-line summary of the projection
    pub fn narrative(&self, symbol: &str) -> String {
        format!(
            "By making smarter choices today, you could have an additional {} in {} years. \
             That's the power of compound growth.",
            format_currency(self.projection.future_value, symbol, 0),
            self.years
        )
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |amount: f64| format_currency(amount, symbol, 2);
        let whole = |amount: f64| format_currency(amount, symbol, 0);
        let mut output = String::new();

        // Header
        output.push_str(&format!(
            "Better Alternative Report: {}% return over {} years\n",
            self.rate_percent, self.years
        ));
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push_str("\n\n");

        // Current expenses
        output.push_str("CURRENT EXPENSES\n");
        output.push_str(&format!(
            "{:>3}  {:<14} {:<24} {:>10} {:<8} {:>14}\n",
            "#", "Category", "Description", "Cost", "Every", "Annual Cost"
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        if self.expenses.is_empty() {
            output.push_str("  No expenses entered.\n");
        }
        for (i, row) in self.expenses.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}  {:<14} {:<24} {:>10} {:<8} {:>14}\n",
                i + 1,
                truncate(&row.expense.category, 14),
                truncate(&row.expense.description, 24),
                money(row.expense.current_cost),
                row.expense.frequency.to_string(),
                money(row.annual_cost)
            ));
        }
        output.push_str(&format!(
            "{:<62} {:>14}\n\n",
            "Total Annual Cost:",
            money(self.totals.total_current_annual)
        ));

        // Alternatives
        if !self.alternatives.is_empty() {
            output.push_str("BETTER ALTERNATIVES\n");
            output.push_str(&format!(
                "{:>3}  {:<20} {:<24} {:>16} {:>16}\n",
                "#", "Original Expense", "Better Alternative", "New Cost", "Savings"
            ));
            output.push_str(&separator(REPORT_WIDTH));
            output.push('\n');

            for (i, row) in self.alternatives.iter().enumerate() {
                let frequency = row.expense.frequency.as_str();
                output.push_str(&format!(
                    "{:>3}  {:<20} {:<24} {:>16} {:>16}\n",
                    i + 1,
                    truncate(&row.expense.description, 20),
                    truncate(&row.alternative.suggestion, 24),
                    format!("{}{} / {}", symbol, format_amount(row.alternative.new_cost), frequency),
                    format!("-{}{} / {}", symbol, format_amount(row.alternative.savings), frequency),
                ));
                output.push_str(&format!(
                    "{:<62} {:>14}\n",
                    "     Annual Savings:",
                    money(row.alternative.annual_savings)
                ));
            }
            output.push_str(&format!(
                "{:<62} {:>14}\n\n",
                "Total Annual Savings:",
                money(self.totals.total_savings_annual)
            ));
        }

        // Growth
        output.push_str(&format_section("INVESTMENT GROWTH", REPORT_WIDTH));
        output.push_str(&format!(
            "{:<40} {:>20}\n",
            "Annual Savings to Invest:",
            money(self.totals.total_savings_annual)
        ));
        output.push_str(&format!(
            "{:<40} {:>20}\n",
            "Total Contributions:",
            money(self.projection.total_contributions)
        ));
        output.push_str(&format!(
            "{:<40} {:>20}\n",
            "Investment Gains:",
            format_gain(self.projection.investment_gains, symbol)
        ));
        output.push_str(&format!(
            "{:<40} {:>20}\n",
            format!("Future Value in {} Years:", self.years),
            money(self.projection.future_value)
        ));
        if self.projection.future_value > 0.0 {
            let share = self.projection.investment_gains / self.projection.future_value * 100.0;
            output.push_str(&format!(
                "{:<40} {} {}\n",
                "Share from Growth:",
                format_bar(self.projection.investment_gains, self.projection.future_value, 20),
                format_percentage(share)
            ));
        }
        output.push_str(&self.narrative(symbol));
        output.push_str("\n\n");

        // Comparison
        output.push_str(&format_section("SAVINGS VS LOSS COMPARISON", REPORT_WIDTH));
        output.push_str("CURRENT PATH (No Changes)\n");
        output.push_str(&format!(
            "  {:<38} {:>20}\n",
            format!("Total Spent Over {} Years:", self.years),
            money(self.comparison.current_path_total)
        ));
        output.push_str("  Money gone forever - no investment growth\n\n");

        output.push_str("BETTER PATH (With Alternatives)\n");
        output.push_str(&format!(
            "  {:<38} {:>20}\n",
            format!("Total Spent Over {} Years:", self.years),
            money(self.comparison.better_path_spent)
        ));
        output.push_str(&format!(
            "  {:<38} {:>20}\n",
            "Plus Investment Growth:",
            format_gain(self.comparison.better_path_growth, symbol)
        ));
        output.push_str(&format!(
            "  {} better off\n\n",
            whole(self.comparison.net_position)
        ));

        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "THE DIFFERENCE: {}\n",
            whole(self.comparison.difference)
        ));
        output.push_str(&format!(
            "That's what making better choices is worth in {} years\n",
            self.years
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AltResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| AltError::Export(e.to_string());

        csv_writer
            .write_record([
                "#",
                "Category",
                "Description",
                "Frequency",
                "Current Cost",
                "Annual Cost",
                "Suggestion",
                "New Cost",
                "Savings",
                "Annual Savings",
            ])
            .map_err(export_err)?;

        for (i, row) in self.alternatives.iter().enumerate() {
            csv_writer
                .write_record([
                    (i + 1).to_string(),
                    row.expense.category.clone(),
                    row.expense.description.clone(),
                    row.expense.frequency.as_str().to_string(),
                    format_amount(row.expense.current_cost),
                    format_amount(row.expense.annual_cost()),
                    row.alternative.suggestion.clone(),
                    format_amount(row.alternative.new_cost),
                    format_amount(row.alternative.savings),
                    format_amount(row.alternative.annual_savings),
                ])
                .map_err(export_err)?;
        }

        let summary = [
            ("TOTAL CURRENT ANNUAL", self.totals.total_current_annual),
            ("TOTAL NEW ANNUAL", self.totals.total_new_annual),
            ("TOTAL SAVINGS ANNUAL", self.totals.total_savings_annual),
            ("TOTAL CONTRIBUTIONS", self.projection.total_contributions),
            ("INVESTMENT GAINS", self.projection.investment_gains),
            ("FUTURE VALUE", self.projection.future_value),
            ("CURRENT PATH TOTAL", self.comparison.current_path_total),
            ("BETTER PATH SPENT", self.comparison.better_path_spent),
            ("NET POSITION", self.comparison.net_position),
            ("DIFFERENCE", self.comparison.difference),
        ];

        for (label, amount) in summary {
            let amount = format_amount(amount);
            csv_writer
                .write_record(["", label, "", "", "", "", "", "", "", amount.as_str()])
                .map_err(export_err)?;
        }

        csv_writer
            .flush()
            .map_err(|e| AltError::Export(e.to_string()))?;

        Ok(())
    }
}
