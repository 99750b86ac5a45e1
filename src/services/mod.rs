//! Service layer for Briefly
//!
//! Intents describe user actions, the budget reducer turns one into the next
//! state, and the dashboard persists and audits the result.

pub mod budget;
pub mod dashboard;
pub mod intent;

pub use budget::{reduce, DashboardState};
pub use dashboard::Dashboard;
pub use intent::{Intent, Outcome, Touches};
