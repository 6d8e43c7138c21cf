use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Level;

/// Open the log file and install it as the global subscriber.
///
/// The file is opened once in append mode (created if absent) and receives
/// every event at DEBUG and above as one JSON line.
///
/// # Errors
///
/// Fails when the log file cannot be opened.
pub(crate) fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
