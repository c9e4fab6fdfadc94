//! Path management for Better Alternative
//!
//! ## Path Resolution Order
//!
//! 1. `BETTERALT_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory for `better-alternative`
//!    (e.g. `~/.config/better-alternative` on Linux)

use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::AltError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "BETTERALT_CONFIG_DIR";

/// Manages all paths used by Better Alternative
#[derive(Debug, Clone)]
pub struct AltPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl AltPaths {
    /// Create a new AltPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, AltError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create AltPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("betteralt.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), AltError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AltError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check whether settings have been saved before
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the platform configuration directory
fn resolve_default_path() -> Result<PathBuf, AltError> {
    ProjectDirs::from("", "", "better-alternative")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| AltError::Config("Could not determine a configuration directory".into()))
}
