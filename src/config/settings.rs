//! User settings for Better Alternative
//!
//! Holds the defaults a new session starts from and a few display
//! preferences. Expense data is never stored here.

use serde::{Deserialize, Serialize};

use super::paths::AltPaths;
use crate::error::AltError;

/// Lowest annual return rate the interactive controls allow, in percent
pub const MIN_RATE_PERCENT: f64 = 0.0;
/// Highest annual return rate the interactive controls allow, in percent
pub const MAX_RATE_PERCENT: f64 = 15.0;
/// Step of the rate control, in percent
pub const RATE_STEP: f64 = 0.5;
/// Shortest horizon the interactive controls allow, in years
pub const MIN_YEARS: u32 = 1;
/// Longest horizon the interactive controls allow, in years
pub const MAX_YEARS: u32 = 30;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Annual return rate new sessions start with
    #[serde(default = "default_rate_percent")]
    pub default_rate_percent: f64,

    /// Time horizon new sessions start with
    #[serde(default = "default_years")]
    pub default_years: u32,

    /// Currency symbol used in formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Line shown across the top of the interactive screen
    #[serde(default = "default_banner")]
    pub banner_message: String,

    /// Whether new sessions start with the example expenses
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_rate_percent() -> f64 {
    7.0
}

fn default_years() -> u32 {
    10
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_banner() -> String {
    "Join the Wealth Building Mastermind - Next Session Dec 15th | Register Now →".to_string()
}

fn default_seed_examples() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_rate_percent: default_rate_percent(),
            default_years: default_years(),
            currency_symbol: default_currency(),
            banner_message: default_banner(),
            seed_examples: default_seed_examples(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &AltPaths) -> Result<Self, AltError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AltError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| AltError::Config(format!("Failed to parse settings file: {}", e)))?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AltPaths) -> Result<(), AltError> {
        self.validate()?;
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AltError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| AltError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::info!(path = %settings_path.display(), "saved settings");
        Ok(())
    }

    /// Check that the defaults are within the interactive control bounds
    pub fn validate(&self) -> Result<(), AltError> {
        if !(MIN_RATE_PERCENT..=MAX_RATE_PERCENT).contains(&self.default_rate_percent) {
            return Err(AltError::Validation(format!(
                "Default rate must be between {}% and {}%, got {}%",
                MIN_RATE_PERCENT, MAX_RATE_PERCENT, self.default_rate_percent
            )));
        }

        if !(MIN_YEARS..=MAX_YEARS).contains(&self.default_years) {
            return Err(AltError::Validation(format!(
                "Default horizon must be between {} and {} years, got {}",
                MIN_YEARS, MAX_YEARS, self.default_years
            )));
        }

        Ok(())
    }

    /// Set one setting from its key and textual value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AltError> {
        match key {
            "default_rate_percent" | "rate" => {
                self.default_rate_percent = value.trim().trim_end_matches('%').parse().map_err(
                    |_| AltError::Validation(format!("Invalid rate: '{}'", value)),
                )?;
            }
            "default_years" | "years" => {
                self.default_years = value
                    .trim()
                    .parse()
                    .map_err(|_| AltError::Validation(format!("Invalid years: '{}'", value)))?;
            }
            "currency_symbol" | "currency" => self.currency_symbol = value.to_string(),
            "banner_message" | "banner" => self.banner_message = value.to_string(),
            "seed_examples" | "examples" => {
                self.seed_examples = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(AltError::Validation(format!(
                            "Invalid boolean: '{}' (use true or false)",
                            value
                        )))
                    }
                };
            }
            _ => {
                return Err(AltError::Config(format!(
                    "Unknown setting: '{}'. Valid keys: default_rate_percent, default_years, \
                     currency_symbol, banner_message, seed_examples",
                    key
                )))
            }
        }

        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_rate_percent, 7.0);
        assert_eq!(settings.default_years, 10);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.seed_examples);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AltPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_years = 25;
        settings.seed_examples = false;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AltPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_years": 3}"#).unwrap();
        assert_eq!(settings.default_years, 3);
        assert_eq!(settings.default_rate_percent, 7.0);
    }

    #[test]
    fn test_set_values() {
        let mut settings = Settings::default();
        settings.set("rate", "5.5%").unwrap();
        settings.set("years", "30").unwrap();
        settings.set("seed_examples", "off").unwrap();
        settings.set("currency", "€").unwrap();

        assert_eq!(settings.default_rate_percent, 5.5);
        assert_eq!(settings.default_years, 30);
        assert!(!settings.seed_examples);
        assert_eq!(settings.currency_symbol, "€");
    }

    #[test]
    fn test_set_rejects_out_of_bounds_and_unknown() {
        let mut settings = Settings::default();
        assert!(settings.set("rate", "20").unwrap_err().is_validation());
        assert!(settings.set("years", "0").unwrap_err().is_validation());
        assert!(matches!(
            settings.set("colour", "blue"),
            Err(AltError::Config(_))
        ));
    }
}
