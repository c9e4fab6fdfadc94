//! YAML Export functionality
//!
//! Exports a scenario to YAML for human-readable sharing.

use std::io::Write;

use crate::error::{AltError, AltResult};
use crate::export::json::ScenarioExport;
use crate::services::Session;

/// Export a session to YAML format
pub fn export_scenario_yaml<W: Write>(session: &Session, writer: &mut W) -> AltResult<()> {
    let export = ScenarioExport::from_session(session);
    let export_err = |e: std::io::Error| AltError::Export(e.to_string());

    // Add a header comment
    writeln!(writer, "# Better Alternative Scenario Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(
        writer,
        "# Totals, projection and comparison are recomputed when this file is read back."
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AltError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_scenario_yaml(yaml_str: &str) -> AltResult<ScenarioExport> {
    let export: ScenarioExport =
        serde_yaml::from_str(yaml_str).map_err(|e| AltError::Import(e.to_string()))?;

    export.validate().map_err(AltError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Frequency};

    #[test]
    fn test_yaml_export() {
        let mut session = Session::new(5.0, 20);
        session
            .add(Expense::new("Fitness", "Gym membership", 50.0, Frequency::Monthly))
            .unwrap();

        let mut yaml_output = Vec::new();
        export_scenario_yaml(&session, &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        assert!(yaml_string.starts_with("# Better Alternative Scenario Export"));
        assert!(yaml_string.contains("Gym membership"));
        assert!(yaml_string.contains("Home equipment or outdoor workouts"));
        assert!(yaml_string.contains("frequency: monthly"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let session = Session::default();

        let mut yaml_output = Vec::new();
        export_scenario_yaml(&session, &mut yaml_output).unwrap();
        let yaml_string = String::from_utf8(yaml_output).unwrap();

        // Comment lines are valid YAML, so the file parses as written
        let imported = import_scenario_yaml(&yaml_string).unwrap();
        assert_eq!(imported.years, 10);
        assert_eq!(imported.expenses.len(), 3);
        assert_eq!(imported.totals, session.totals());
    }
}
