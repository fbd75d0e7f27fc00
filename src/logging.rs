//! Tracing setup.
//!
//! The terminal belongs to the UI while the site is open, so log lines go to
//! a file instead of stdout.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "ESCAPE_EPIC_LOG";

/// Default log file: `<cache_dir>/escape-epic/escape-epic.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("escape-epic").join("escape-epic.log")
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber writing to `path`.
pub fn init_tracing(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
}
