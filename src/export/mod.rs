//! Export module for Better Alternative
//!
//! Exports the current scenario in multiple formats:
//! - CSV: the savings report, or the bare expense sheet (spreadsheet-compatible)
//! - JSON: machine-readable scenario with every derived figure
//! - YAML: human-readable scenario
//!
//! Exports are written only on explicit request.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, export_report_csv};
pub use json::{export_scenario_json, import_scenario_json, ScenarioExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_scenario_yaml, import_scenario_yaml};
