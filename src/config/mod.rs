//! Configuration module for Better Alternative
//!
//! - Platform-aware path resolution
//! - User settings persistence (session defaults and display preferences)

pub mod paths;
pub mod settings;

pub use paths::AltPaths;
pub use settings::Settings;
