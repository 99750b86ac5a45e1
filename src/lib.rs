//! Briefly - terminal budgeting dashboard
//!
//! Briefly keeps a set of cost cards (land, slab, fence and friends), lets
//! the user switch categories on and off, edit amounts and compare totals,
//! and keeps the client details for the case alongside. State lives in a
//! small keyed store so it survives restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and diagnostic logging
//! - `error`: Custom error types
//! - `models`: Cards, categories, client info, UI preferences, chart series
//! - `storage`: Keyed store trait with file and in-memory backends
//! - `services`: Intents, the reducer and the persisting dashboard
//! - `audit`: Append-only log of applied changes
//! - `display`: Text formatting for the command line
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use briefly::services::{Dashboard, Intent};
//! use briefly::storage::MemoryStore;
//! use briefly::models::CategoryKey;
//!
//! let mut dashboard = Dashboard::load(MemoryStore::new());
//! dashboard.dispatch(Intent::ToggleCategory {
//!     card_id: "repc".into(),
//!     key: CategoryKey::Fence,
//! })?;
//! assert_eq!(dashboard.total("repc"), Some(265000.0));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{BrieflyError, BrieflyResult};
