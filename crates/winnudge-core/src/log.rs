//! Logging setup on top of `tracing`.
//!
//! Output goes to stderr by default. With `[logging] enabled = true` it is
//! appended to `<config dir>/logs/winnudge.log` instead, which keeps the
//! listener's stdout free for status lines.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "winnudge.log";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether to log to a file. Defaults to `false` (stderr).
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
        }
    }
}

/// Builds the filter: `RUST_LOG` wins, then the configured level.
fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialises the global subscriber. Call once at startup.
///
/// Falls back to stderr when the log file cannot be opened. Calling it
/// again is harmless.
pub fn init(config: &LogConfig) {
    if config.enabled {
        if let Some(file) = open_log_file() {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
            return;
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_log_file() -> Option<fs::File> {
    let dir = crate::config::config_dir().ok()?.join("logs");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logs_info_to_stderr() {
        // Act
        let config = LogConfig::default();

        // Assert
        assert!(!config.enabled);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn init_twice_does_not_panic() {
        // Act
        init(&LogConfig::default());
        init(&LogConfig {
            enabled: false,
            level: "not a level ((".into(),
        });
    }
}
