//! Expense sheet import
//!
//! Reads a user-supplied list of expenses from CSV, JSON or YAML. This is
//! input only: nothing is ever written back to the sheet.
//!
//! CSV sheets need a header row with `category,description,cost,frequency`.
//! JSON and YAML sheets may be a bare list of expenses or an object with an
//! `expenses` list and optional `rate_percent` / `years`. A file carrying a
//! `schema_version` is a scenario export and goes through the export
//! importer, which checks its version and ids. Costs must be finite numbers.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::error::{AltError, AltResult};
use crate::export::{import_scenario_json, import_scenario_yaml, ScenarioExport};
use crate::models::expense::parse_cost_strict;
use crate::models::{Expense, Frequency};

/// An expense sheet, with optional projection parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseSheet {
    #[serde(default)]
    pub rate_percent: Option<f64>,
    #[serde(default)]
    pub years: Option<u32>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SheetFile {
    Sheet(ExpenseSheet),
    List(Vec<Expense>),
}

impl ExpenseSheet {
    /// Reject costs that would poison every total
    pub fn validate(&self) -> AltResult<()> {
        for (index, expense) in self.expenses.iter().enumerate() {
            if !expense.current_cost.is_finite() {
                return Err(AltError::Import(format!(
                    "expense {}: invalid cost {}",
                    index + 1,
                    expense.current_cost
                )));
            }
        }
        Ok(())
    }
}

impl From<ScenarioExport> for ExpenseSheet {
    fn from(export: ScenarioExport) -> Self {
        Self {
            rate_percent: Some(export.rate_percent),
            years: Some(export.years),
            expenses: export.expenses,
        }
    }
}

impl From<SheetFile> for ExpenseSheet {
    fn from(file: SheetFile) -> Self {
        match file {
            SheetFile::Sheet(sheet) => sheet,
            SheetFile::List(expenses) => Self {
                expenses,
                ..Self::default()
            },
        }
    }
}

/// Supported sheet formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    Json,
    Yaml,
}

impl SheetFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    category: String,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "current_cost", alias = "amount")]
    cost: String,
    #[serde(default)]
    frequency: String,
}

/// Parse expenses from CSV data
pub fn parse_expenses_csv<R: Read>(reader: R) -> AltResult<Vec<Expense>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut expenses = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let line = index + 2;
        let row = row.map_err(|e| AltError::Import(format!("line {}: {}", line, e)))?;

        let cost = if row.cost.is_empty() {
            0.0
        } else {
            parse_cost_strict(&row.cost)
                .map_err(|e| AltError::Import(format!("line {}: {}", line, e)))?
        };

        expenses.push(Expense::new(
            row.category,
            row.description,
            cost,
            Frequency::from_label(&row.frequency),
        ));
    }

    tracing::debug!(count = expenses.len(), "parsed CSV expense sheet");
    Ok(expenses)
}

/// Parse a JSON expense sheet or scenario export
pub fn parse_sheet_json(data: &str) -> AltResult<ExpenseSheet> {
    let value: serde_json::Value =
        serde_json::from_str(data).map_err(|e| AltError::Import(e.to_string()))?;

    let sheet = if value.get("schema_version").is_some() {
        import_scenario_json(data)?.into()
    } else {
        let file: SheetFile =
            serde_json::from_value(value).map_err(|e| AltError::Import(e.to_string()))?;
        ExpenseSheet::from(file)
    };

    sheet.validate()?;
    Ok(sheet)
}

/// Parse a YAML expense sheet or scenario export
pub fn parse_sheet_yaml(data: &str) -> AltResult<ExpenseSheet> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(data).map_err(|e| AltError::Import(e.to_string()))?;

    let sheet = if value.get("schema_version").is_some() {
        import_scenario_yaml(data)?.into()
    } else {
        let file: SheetFile =
            serde_yaml::from_value(value).map_err(|e| AltError::Import(e.to_string()))?;
        ExpenseSheet::from(file)
    };

    sheet.validate()?;
    Ok(sheet)
}

/// Load an expense sheet from a file, choosing the format by extension
pub fn load_sheet(path: &Path) -> AltResult<ExpenseSheet> {
    let format = SheetFormat::from_path(path).ok_or_else(|| {
        AltError::Import(format!(
            "Unsupported sheet format: {} (use .csv, .json, .yaml or .yml)",
            path.display()
        ))
    })?;

    let data = std::fs::read_to_string(path)
        .map_err(|e| AltError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let sheet = match format {
        SheetFormat::Csv => ExpenseSheet {
            expenses: parse_expenses_csv(data.as_bytes())?,
            ..ExpenseSheet::default()
        },
        SheetFormat::Json => parse_sheet_json(&data)?,
        SheetFormat::Yaml => parse_sheet_yaml(&data)?,
    };

    tracing::info!(
        path = %path.display(),
        expenses = sheet.expenses.len(),
        "loaded expense sheet"
    );
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{export_scenario_json, export_scenario_yaml};
    use crate::services::Session;
    use tempfile::TempDir;

    #[test]
    fn test_parse_csv() {
        let csv_data = "category,description,cost,frequency\n\
                        Food,Daily coffee,6,daily\n\
                        Transport, Uber to work ,$25.00,Daily\n\
                        ,Streaming services,45,\n";

        let expenses = parse_expenses_csv(csv_data.as_bytes()).unwrap();
        assert_eq!(expenses.len(), 3);
        assert_eq!(expenses[0].current_cost, 6.0);
        assert_eq!(expenses[0].frequency, Frequency::Daily);
        assert_eq!(expenses[1].description, "Uber to work");
        assert_eq!(expenses[1].current_cost, 25.0);
        assert!(expenses[2].category.is_empty());
        assert_eq!(expenses[2].frequency, Frequency::Monthly);
    }

    #[test]
    fn test_parse_csv_bad_cost_reports_line() {
        let csv_data = "category,description,cost,frequency\nFood,Coffee,lots,daily\n";
        let err = parse_expenses_csv(csv_data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_json_list_and_sheet() {
        let list = r#"[{"category": "Food", "description": "Coffee", "current_cost": 4, "frequency": "daily"}]"#;
        let sheet = parse_sheet_json(list).unwrap();
        assert_eq!(sheet.expenses.len(), 1);
        assert!(sheet.rate_percent.is_none());

        let full = r#"{"rate_percent": 5.5, "years": 20, "expenses": []}"#;
        let sheet = parse_sheet_json(full).unwrap();
        assert_eq!(sheet.rate_percent, Some(5.5));
        assert_eq!(sheet.years, Some(20));
        assert!(sheet.expenses.is_empty());
    }

    #[test]
    fn test_parse_yaml_sheet() {
        let yaml = "years: 15\nexpenses:\n  - description: Gym\n    current_cost: 50\n    frequency: monthly\n";
        let sheet = parse_sheet_yaml(yaml).unwrap();
        assert_eq!(sheet.years, Some(15));
        assert_eq!(sheet.expenses[0].description, "Gym");
    }

    #[test]
    fn test_parse_csv_rejects_non_finite_cost() {
        for cost in ["NaN", "inf", "-inf"] {
            let csv_data = format!("category,description,cost,frequency\nFood,Coffee,{},daily\n", cost);
            let err = parse_expenses_csv(csv_data.as_bytes()).unwrap_err();
            assert!(matches!(err, AltError::Import(_)));
            assert!(err.to_string().contains("line 2"));
        }
    }

    #[test]
    fn test_parse_yaml_rejects_nan_cost() {
        let yaml = "expenses:\n  - description: Coffee\n    current_cost: .nan\n    frequency: daily\n";
        assert!(matches!(parse_sheet_yaml(yaml), Err(AltError::Import(_))));

        let yaml = "- description: Coffee\n  current_cost: .inf\n";
        assert!(matches!(parse_sheet_yaml(yaml), Err(AltError::Import(_))));
    }

    #[test]
    fn test_parse_json_rejects_huge_cost() {
        // Out of range for f64
        let json = r#"[{"description": "Coffee", "current_cost": 1e999}]"#;
        assert!(parse_sheet_json(json).is_err());
    }

    #[test]
    fn test_scenario_export_reads_back_as_sheet() {
        let session = Session::default();
        let mut json = Vec::new();
        export_scenario_json(&session, &mut json, true).unwrap();
        let sheet = parse_sheet_json(std::str::from_utf8(&json).unwrap()).unwrap();
        assert_eq!(sheet.rate_percent, Some(7.0));
        assert_eq!(sheet.years, Some(10));
        assert_eq!(sheet.expenses.len(), 3);

        let mut yaml = Vec::new();
        export_scenario_yaml(&session, &mut yaml).unwrap();
        let sheet = parse_sheet_yaml(std::str::from_utf8(&yaml).unwrap()).unwrap();
        assert_eq!(sheet.expenses[2].description, "Streaming services");
    }

    #[test]
    fn test_scenario_export_is_checked_on_read() {
        let session = Session::default();
        let mut json = Vec::new();
        export_scenario_json(&session, &mut json, false).unwrap();
        let json = String::from_utf8(json).unwrap();

        let old_version = json.replace("\"1.0.0\"", "\"0.1.0\"");
        let err = parse_sheet_json(&old_version).unwrap_err();
        assert!(err.to_string().contains("Schema version mismatch"));

        let mut export: ScenarioExport = serde_json::from_str(&json).unwrap();
        let first = export.expenses[0].clone();
        export.expenses.push(first);
        let duplicated = serde_json::to_string(&export).unwrap();
        let err = parse_sheet_json(&duplicated).unwrap_err();
        assert!(err.to_string().contains("Duplicate expense id"));
    }

    #[test]
    fn test_load_sheet_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sheet.csv");
        std::fs::write(&path, "category,description,cost,frequency\n,Gym,30,monthly\n").unwrap();

        let sheet = load_sheet(&path).unwrap();
        assert_eq!(sheet.expenses.len(), 1);

        let unknown = temp_dir.path().join("sheet.txt");
        std::fs::write(&unknown, "").unwrap();
        assert!(matches!(load_sheet(&unknown), Err(AltError::Import(_))));
    }
}
