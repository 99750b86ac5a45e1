//! Display formatting for terminal output

pub mod card;
pub mod info;
pub mod money;

pub use card::{format_card_details, format_card_list};
pub use info::{format_case_info, format_ui_preferences};
pub use money::format_amount;
