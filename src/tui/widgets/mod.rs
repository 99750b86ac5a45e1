//! Reusable widgets for the TUI

pub mod input;
pub mod segments;

pub use input::TextInput;
pub use segments::{segment_widths, SegmentBar};
