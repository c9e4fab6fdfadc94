//! Reports module for Better Alternative
//!
//! The savings report collects every figure derived from a session into one
//! value that the CLI, the TUI and the exporters all render from.

pub mod savings;

pub use savings::{AlternativeRow, ExpenseRow, PathComparison, SavingsReport};
