//! Application logging.
//!
//! Everything goes through the `log` facade. [`Logger`] additionally keeps the
//! most recent lines in memory for the in-app logs dialog, and when logging is
//! enabled in the configuration a `fern` dispatcher writes every record to a
//! file (the terminal itself belongs to the UI).

use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};

/// Lines kept in memory for the logs dialog
const MAX_MEMORY_LINES: usize = 500;

/// Path of the file the global dispatcher writes to, once installed
static FILE_LOGGING: OnceCell<PathBuf> = OnceCell::new();

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
        }
    }

    /// Create a logger, installing file output when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            let path = Self::get_log_file_path()?;
            init_file_logging(&path)?;
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether a file dispatcher has been installed for this process
    pub fn has_file_writer(&self) -> bool {
        self.enabled && FILE_LOGGING.get().is_some()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_MEMORY_LINES {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Location of the log file under the user's data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory for the log file"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global `fern` dispatcher writing to `path`
///
/// Only the first call in a process installs anything; later calls are no-ops.
fn init_file_logging(path: &Path) -> Result<()> {
    FILE_LOGGING
        .get_or_try_init(|| -> Result<PathBuf> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }

            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}: {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(log::LevelFilter::Debug)
                .level_for("hyper", log::LevelFilter::Warn)
                .level_for("reqwest", log::LevelFilter::Info)
                .chain(file)
                .apply()
                .map_err(|e| anyhow::anyhow!("Failed to install file logger: {}", e))?;

            Ok(path.to_path_buf())
        })
        .map(|_| ())
}
