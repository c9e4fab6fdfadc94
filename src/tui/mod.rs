//! Terminal User Interface module
//!
//! An editable expense grid with live alternatives, the rate and horizon
//! controls, and the growth and comparison panels, all recomputed from the
//! session on every frame.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
