//! Configuration module for Briefly
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Diagnostic logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::{init_tracing, LogTarget};
pub use paths::BrieflyPaths;
pub use settings::Settings;
