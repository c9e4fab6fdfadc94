//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod calc;
pub mod config;
pub mod export;
pub mod rules;
pub mod scenario;

pub use calc::{handle_calc_command, CalcArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use rules::{handle_rules_command, RulesArgs};
pub use scenario::ScenarioArgs;
