//! CSV Export functionality
//!
//! Exports the savings report and the raw expense sheet to CSV. The expense
//! sheet layout is the one the sheet importer reads.

use std::io::Write;

use crate::error::{AltError, AltResult};
use crate::models::Expense;
use crate::services::Session;

/// Export the savings report of a session to CSV
pub fn export_report_csv<W: Write>(session: &Session, writer: &mut W) -> AltResult<()> {
    session.report().export_csv(writer)
}

/// Export expenses as an importable sheet
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> AltResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| AltError::Export(e.to_string());

    csv_writer
        .write_record(["category", "description", "cost", "frequency"])
        .map_err(export_err)?;

    for expense in expenses {
        // Full precision so the sheet reads back to the same cost
        let cost = expense.current_cost.to_string();
        csv_writer
            .write_record([
                expense.category.as_str(),
                expense.description.as_str(),
                cost.as_str(),
                expense.frequency.as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| AltError::Export(e.to_string()))?;

    Ok(())
}
