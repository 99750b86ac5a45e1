//! Modal dialogs drawn over the dashboard

pub mod confirm;
pub mod edit_info;
pub mod edit_value;
pub mod help;
