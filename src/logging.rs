//! Tracing subscriber setup
//!
//! The terminal belongs to the TUI, so events go to a log file in the
//! config directory instead of stderr.

use crate::config::Config;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Path of the log file, next to the config
pub fn log_path() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("college-tui.log"))
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Failing to create the log file
/// leaves logging disabled; it never stops the app.
pub fn init_tracing(level: &str) {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
