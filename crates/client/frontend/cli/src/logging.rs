//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr, so tracing output only goes to a
//! per-session file under the platform cache directory.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber. Keep the returned guard alive for the
/// whole run or buffered lines are lost.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_string).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("Failed to create log dir {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "battle.log");
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
        .context("Failed to install tracing subscriber")?;

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}/battle.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for battle logs.
///
/// - macOS: `~/Library/Caches/battle/logs`
/// - Linux: `~/.cache/battle/logs` (or `$XDG_CACHE_HOME/battle/logs`)
/// - Windows: `%LOCALAPPDATA%\battle\cache\logs`
/// - Fallback: `/tmp/battle/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "battle")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/battle"))
        .join("logs")
}
