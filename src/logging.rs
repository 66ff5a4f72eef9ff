//! Tracing setup. The terminal belongs to the TUI, so diagnostics go to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "SYLLABUS_LOG";

/// Installs a file-backed subscriber writing to `path`.
///
/// The filter comes from `SYLLABUS_LOG` if set, else `default_filter`. Returns `false` and leaves
/// logging disabled if the file cannot be opened or a subscriber is already installed.
pub fn init(path: &Path, default_filter: &str) -> bool {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
