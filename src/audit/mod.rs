//! Audit trail for dashboard changes
//!
//! Every applied change to a card, the client-info record or the UI
//! preferences is appended to a JSONL log with before/after snapshots and a
//! short diff summary. Resets are recorded as a single store-wide entry.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
