//! CLI command for scenario export
//!
//! Writes the current scenario to a file in JSON, YAML or CSV.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{AltError, AltResult};
use crate::export::{csv, json, yaml};

use super::scenario::ScenarioArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full scenario)
    Json,
    /// YAML format (full scenario, human-readable)
    Yaml,
    /// CSV format (savings report)
    Csv,
}

/// Arguments for `export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// With CSV, write only the expense sheet (re-importable with --file)
    #[arg(long)]
    pub sheet: bool,

    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> AltResult<()> {
    let session = args.scenario.build_session(settings)?;

    let file = File::create(&args.output).map_err(|e| {
        AltError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Json => json::export_scenario_json(&session, &mut writer, args.pretty)?,
        ExportFormat::Yaml => yaml::export_scenario_yaml(&session, &mut writer)?,
        ExportFormat::Csv if args.sheet => csv::export_expenses_csv(session.expenses(), &mut writer)?,
        ExportFormat::Csv => csv::export_report_csv(&session, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| AltError::Export(e.to_string()))?;

    tracing::info!(path = %args.output.display(), format = ?args.format, "exported scenario");
    println!(
        "Exported {} expenses to: {}",
        session.len(),
        args.output.display()
    );

    Ok(())
}
