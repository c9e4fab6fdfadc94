//! CLI command for the savings report
//!
//! Builds a scenario from flags or a sheet and prints the full report.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::AltResult;

use super::scenario::ScenarioArgs;

/// Arguments for `calc`
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Print the report as CSV instead of a formatted table
    #[arg(long)]
    pub csv: bool,
}

/// Handle the calc command
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> AltResult<()> {
    if args.scenario.is_empty() {
        println!("No expenses given. Use --expense, --file or --examples.");
        println!();
    }

    let session = args.scenario.build_session(settings)?;
    let report = session.report();

    if args.csv {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        report.export_csv(&mut handle)?;
    } else {
        print!("{}", report.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
