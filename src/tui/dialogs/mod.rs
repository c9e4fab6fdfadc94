//! Dialog modules for the TUI

pub mod confirm;
pub mod help;
