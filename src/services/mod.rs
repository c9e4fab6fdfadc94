//! Service layer for Better Alternative
//!
//! The computations run in a fixed order: annualize (on the models), then
//! recommend, then aggregate, then project. The session owns the inputs and
//! reruns that chain whenever it is asked for a figure.

pub mod aggregator;
pub mod import;
pub mod projector;
pub mod recommender;
pub mod session;

pub use aggregator::{aggregate, Totals};
pub use import::{load_sheet, ExpenseSheet};
pub use projector::{project, Projection};
pub use recommender::{recommend, recommend_all, Rule, RULES};
pub use session::Session;
