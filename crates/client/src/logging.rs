//! File logging setup.
//!
//! The game owns stdout, so tracing output goes to a file only:
//! `<cache>/arena/logs/arena.log` unless `ARENA_LOG_DIR` overrides it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

pub const LOG_FILE_NAME: &str = "arena.log";

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/arena/logs`
/// - Linux: `~/.cache/arena/logs` (or `$XDG_CACHE_HOME/arena/logs`)
/// - Windows: `%LOCALAPPDATA%\arena\cache\logs`
/// - Fallback: `<tmp>/arena/logs`
pub fn log_dir(config: &CliConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }

    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("arena"))
        .join("logs")
}

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the program so buffered lines get flushed.
pub fn setup_logging(config: &CliConfig) -> Result<WorkerGuard> {
    let log_dir = log_dir(config);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_takes_precedence() {
        let config = CliConfig {
            seed: None,
            log_dir: Some(PathBuf::from("/var/log/arena-test")),
        };
        assert_eq!(log_dir(&config), PathBuf::from("/var/log/arena-test"));
    }

    #[test]
    fn default_dir_ends_in_logs() {
        let dir = log_dir(&CliConfig::default());
        assert!(dir.ends_with("logs"));
    }
}
