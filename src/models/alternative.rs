//! Alternative model
//!
//! A cheaper substitute for one expense. Alternatives are derived on demand
//! from the expense list and never stored on their own.

use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;

/// A recommended substitute for an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// The expense this alternative replaces (lookup only)
    pub expense_id: ExpenseId,

    /// What to do instead
    pub suggestion: String,

    /// Cost of the substitute, per period of the original expense, never negative
    pub new_cost: f64,

    /// `current_cost - new_cost`, per period of the original expense
    pub savings: f64,

    /// `savings` normalized to a yearly total
    pub annual_savings: f64,
}
