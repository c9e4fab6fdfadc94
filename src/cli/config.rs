//! CLI commands for settings management

use clap::Subcommand;

use crate::config::paths::AltPaths;
use crate::config::settings::Settings;
use crate::error::AltResult;

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Change one setting
    Set {
        /// Setting name (default_rate_percent, default_years, currency_symbol,
        /// banner_message, seed_examples)
        key: String,
        /// New value
        value: String,
    },

    /// Restore all settings to their defaults
    Reset,
}

/// Handle config commands
pub fn handle_config_command(
    paths: &AltPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> AltResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Better Alternative Configuration");
            println!("================================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            if !paths.is_initialized() {
                println!("(no settings saved yet, showing defaults)");
            }
            println!();
            println!("Settings:");
            println!("  default_rate_percent: {}", settings.default_rate_percent);
            println!("  default_years:        {}", settings.default_years);
            println!("  currency_symbol:      {}", settings.currency_symbol);
            println!("  banner_message:       {}", settings.banner_message);
            println!("  seed_examples:        {}", settings.seed_examples);
        }
        ConfigCommands::Set { key, value } => {
            let mut updated = settings.clone();
            updated.set(&key, &value)?;
            updated.save(paths)?;
            println!("Set {} = {}", key, value);
        }
        ConfigCommands::Reset => {
            Settings::default().save(paths)?;
            println!("Settings reset to defaults.");
        }
    }

    Ok(())
}
