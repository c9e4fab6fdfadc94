//! JSON Export functionality
//!
//! Exports one scenario (expenses, parameters and every derived figure) to
//! JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::error::{AltError, AltResult};
use crate::models::{Alternative, Expense};
use crate::reports::{PathComparison, SavingsReport};
use crate::services::{Projection, Session, Totals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A complete scenario export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Annual return rate, in percent
    pub rate_percent: f64,

    /// Time horizon, in years
    pub years: u32,

    /// Every expense, in entry order
    pub expenses: Vec<Expense>,

    /// Alternatives for the eligible expenses
    pub alternatives: Vec<Alternative>,

    /// Yearly totals
    pub totals: Totals,

    /// Growth projection
    pub projection: Projection,

    /// Current path against better path
    pub comparison: PathComparison,
}

impl ScenarioExport {
    /// Build an export from a generated report
    pub fn from_report(report: &SavingsReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            rate_percent: report.rate_percent,
            years: report.years,
            expenses: report.expense_list(),
            alternatives: report.alternative_list(),
            totals: report.totals,
            projection: report.projection,
            comparison: report.comparison,
        }
    }

    /// Build an export from the current state of a session
    pub fn from_session(session: &Session) -> Self {
        Self::from_report(&session.report())
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut expense_ids = HashSet::new();
        for expense in &self.expenses {
            if !expense_ids.insert(expense.id) {
                return Err(format!("Duplicate expense id {}", expense.id));
            }
        }

        for alternative in &self.alternatives {
            if !expense_ids.contains(&alternative.expense_id) {
                return Err(format!(
                    "Alternative '{}' references unknown expense {}",
                    alternative.suggestion, alternative.expense_id
                ));
            }
        }

        Ok(())
    }
}

/// Export a session to JSON
pub fn export_scenario_json<W: Write>(
    session: &Session,
    writer: &mut W,
    pretty: bool,
) -> AltResult<()> {
    let export = ScenarioExport::from_session(session);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| AltError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a JSON export
pub fn import_scenario_json(json_str: &str) -> AltResult<ScenarioExport> {
    let export: ScenarioExport =
        serde_json::from_str(json_str).map_err(|e| AltError::Import(e.to_string()))?;

    export.validate().map_err(AltError::Import)?;

    Ok(export)
}
