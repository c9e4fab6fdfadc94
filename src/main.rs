use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use better_alternative::cli::{
    handle_calc_command, handle_config_command, handle_export_command, handle_rules_command,
    CalcArgs, ConfigCommands, ExportArgs, RulesArgs, ScenarioArgs,
};
use better_alternative::config::{paths::AltPaths, settings::Settings};
use better_alternative::logging::{init_logging, LogTarget};

#[derive(Parser)]
#[command(
    name = "betteralt",
    version,
    about = "Find smarter alternatives for your recurring expenses",
    long_about = "The Better Alternative suggests a cheaper substitute for each recurring \
                  expense and shows what the money saved grows to when it is invested \
                  every month instead of spent."
)]
struct Cli {
    /// Log debug output (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui(TuiArgs),

    /// Print the savings report for a scenario
    Calc(CalcArgs),

    /// Export a scenario to JSON, YAML or CSV
    Export(ExportArgs),

    /// List the alternative rules or check which one matches
    Rules(RulesArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Args, Default)]
struct TuiArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AltPaths::new()?;

    // The TUI owns the terminal, so it logs to a file
    let interactive = matches!(cli.command, None | Some(Commands::Tui(_)));
    let log_file = paths.log_file();
    let target = if interactive {
        LogTarget::File(&log_file)
    } else {
        LogTarget::Stderr
    };
    init_logging(cli.verbose, target)?;

    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(config_dir = %paths.base_dir().display(), "settings loaded");

    match cli.command {
        None => run_tui(&settings, TuiArgs::default())?,
        Some(Commands::Tui(args)) => run_tui(&settings, args)?,
        Some(Commands::Calc(args)) => handle_calc_command(&settings, args)?,
        Some(Commands::Export(args)) => handle_export_command(&settings, args)?,
        Some(Commands::Rules(args)) => handle_rules_command(&settings, args)?,
        Some(Commands::Config { command }) => handle_config_command(&paths, &settings, command)?,
    }

    Ok(())
}

fn run_tui(settings: &Settings, args: TuiArgs) -> Result<()> {
    let mut scenario = args.scenario;
    if scenario.is_empty() {
        scenario.examples = settings.seed_examples;
    }
    let session = scenario.build_session(settings)?;

    better_alternative::tui::run_tui(settings, session)
}
