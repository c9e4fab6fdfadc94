//! Scenario input flags shared by the `calc` and `export` commands

use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{AltError, AltResult};
use crate::models::Expense;
use crate::services::import::load_sheet;
use crate::services::session::example_expenses;
use crate::services::Session;

/// Where a scenario's expenses and parameters come from
#[derive(Args, Debug, Clone, Default)]
pub struct ScenarioArgs {
    /// Expense as "Category|Description|Cost|frequency" (repeatable)
    #[arg(short, long = "expense", value_name = "CAT|DESC|COST|FREQ")]
    pub expenses: Vec<String>,

    /// Expense sheet to read (.csv, .json, .yaml)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Annual return rate in percent (default from settings)
    #[arg(short, long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Time horizon in years (default from settings)
    #[arg(short, long)]
    pub years: Option<u32>,

    /// Start from the example expenses
    #[arg(long)]
    pub examples: bool,
}

impl ScenarioArgs {
    /// Build a session from the flags.
    ///
    /// Expenses are taken in order: examples, then the sheet, then each
    /// `--expense`. Flags override sheet parameters, which override settings.
    pub fn build_session(&self, settings: &Settings) -> AltResult<Session> {
        let sheet = self.file.as_deref().map(load_sheet).transpose()?;

        let rate_percent = self
            .rate
            .or_else(|| sheet.as_ref().and_then(|s| s.rate_percent))
            .unwrap_or(settings.default_rate_percent);
        let years = self
            .years
            .or_else(|| sheet.as_ref().and_then(|s| s.years))
            .unwrap_or(settings.default_years);

        if !rate_percent.is_finite() || rate_percent < 0.0 {
            return Err(AltError::Validation(format!(
                "Rate must be a non-negative percentage, got {}",
                rate_percent
            )));
        }

        let mut session = Session::new(rate_percent, years);

        if self.examples {
            session.extend(example_expenses());
        }
        if let Some(sheet) = sheet {
            session.extend(sheet.expenses);
        }
        for spec in &self.expenses {
            let expense = Expense::parse_spec(spec).map_err(|e| {
                AltError::Validation(format!("Invalid expense '{}': {}", spec, e))
            })?;
            session.add(expense)?;
        }

        tracing::debug!(
            expenses = session.len(),
            rate_percent,
            years,
            "built scenario"
        );
        Ok(session)
    }

    /// Whether no expense source was given
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.file.is_none() && !self.examples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frequency;
    use tempfile::TempDir;

    #[test]
    fn test_flags_build_session() {
        let args = ScenarioArgs {
            expenses: vec!["Food|Daily coffee|6|daily".into(), "|Gym|50".into()],
            rate: Some(5.0),
            ..Default::default()
        };

        let session = args.build_session(&Settings::default()).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.rate_percent(), 5.0);
        assert_eq!(session.years(), 10);
        assert_eq!(session.expenses()[1].frequency, Frequency::Monthly);
    }

    #[test]
    fn test_examples_then_sheet() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sheet.yaml");
        std::fs::write(
            &path,
            "rate_percent: 4\nyears: 20\nexpenses:\n  - description: Gym\n    current_cost: 30\n",
        )
        .unwrap();

        let args = ScenarioArgs {
            file: Some(path),
            years: Some(5),
            examples: true,
            ..Default::default()
        };

        let session = args.build_session(&Settings::default()).unwrap();
        assert_eq!(session.len(), 4);
        assert_eq!(session.expenses()[3].description, "Gym");
        assert_eq!(session.rate_percent(), 4.0);
        assert_eq!(session.years(), 5);
    }

    #[test]
    fn test_rejects_bad_input() {
        let negative = ScenarioArgs {
            rate: Some(-1.0),
            ..Default::default()
        };
        assert!(negative
            .build_session(&Settings::default())
            .unwrap_err()
            .is_validation());

        let bad_cost = ScenarioArgs {
            expenses: vec!["Food|Coffee|lots|daily".into()],
            ..Default::default()
        };
        assert!(bad_cost
            .build_session(&Settings::default())
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_is_empty() {
        assert!(ScenarioArgs::default().is_empty());
        let args = ScenarioArgs {
            examples: true,
            ..Default::default()
        };
        assert!(!args.is_empty());
    }
}
