//! Core data models for Better Alternative
//!
//! Expenses are the only records a session owns. Alternatives are derived
//! from them and carry a back-reference to the expense they replace.

pub mod alternative;
pub mod expense;
pub mod frequency;
pub mod ids;

pub use alternative::Alternative;
pub use expense::{Expense, ExpenseField, ExpenseParseError, ExpenseUpdate};
pub use frequency::{annualize, annualize_label, Frequency};
pub use ids::ExpenseId;
