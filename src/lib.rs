//! Better Alternative - financial optimization calculator
//!
//! This library takes a list of recurring expenses, suggests a cheaper
//! alternative for each one, and projects what the yearly savings grow to
//! when invested monthly at a fixed annual return.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expenses, frequencies and alternatives
//! - `services`: Annualizer, recommender, aggregator, projector and the session
//! - `reports`: The savings report and path comparison
//! - `export`: JSON, YAML and CSV scenario exports
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use better_alternative::services::Session;
//!
//! let session = Session::with_examples(7.0, 10);
//! let report = session.report();
//! assert!(report.totals.total_savings_annual > 0.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{AltError, AltResult};
