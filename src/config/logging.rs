//! Diagnostic logging setup
//!
//! Installs a global `tracing` subscriber once. Command-line runs log to
//! stderr; the TUI logs to a file so the alternate screen stays clean.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Where diagnostic output should go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_level`. Calling this more than once is a no-op.
pub fn init_tracing(default_level: &str, target: LogTarget<'_>) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("briefly={}", default_level))
        });

        match target {
            LogTarget::Stderr => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogTarget::File(path) => {
                // Without a log file, stay silent rather than draw over the TUI
                if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
                    fmt()
                        .with_env_filter(filter)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .init();
                }
            }
        }
    });
}
