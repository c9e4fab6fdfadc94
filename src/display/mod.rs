//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, report sections and listings
//! for terminal display.

pub mod money;
pub mod report;
pub mod rules;

pub use money::{format_amount, format_currency, format_gain};
pub use report::{
    double_separator, format_bar, format_percentage, format_section, separator, truncate,
};
pub use rules::format_rule_table;
