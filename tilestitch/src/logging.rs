//! Logging infrastructure for TileStitch.
//!
//! Provides structured logging with file output and console output:
//! - Writes to `~/.tilestitch/logs/tilestitch.log` (cleared on session start)
//! - Also prints compact lines to stderr, keeping stdout for command output
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    log_path: PathBuf,
}

impl LoggingGuard {
    /// Path of the log file being written.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Initialize logging system.
///
/// Creates the log directory if needed, clears the previous log file,
/// and sets up dual output to both file and stderr.
///
/// # Arguments
///
/// * `log_path` - Log file path (e.g., `~/.tilestitch/logs/tilestitch.log`)
/// * `debug_mode` - Force `debug` level regardless of `RUST_LOG`
///
/// # Errors
///
/// Returns error if log directory cannot be created or log file cannot be
/// cleared, or if a global subscriber is already installed.
pub fn init_logging(log_path: &Path, debug_mode: bool) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = prepare_log_file(log_path)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false) // No ANSI colors in file
        .with_span_events(FmtSpan::CLOSE);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(debug_mode))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_path: log_dir.join(log_file),
    })
}

/// Create the parent directory of `log_path` and truncate the file.
///
/// Returns the directory and file name halves of the path.
fn prepare_log_file(log_path: &Path) -> Result<(PathBuf, String), io::Error> {
    let log_file = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log path has no file name: {}", log_path.display()),
            )
        })?
        .to_string();
    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&log_dir)?;
    // Clear previous log file by writing empty content
    fs::write(log_dir.join(&log_file), "")?;

    Ok((log_dir, log_file))
}

/// Level filter: `debug` in debug mode, else `RUST_LOG`, else `info`.
fn env_filter(debug_mode: bool) -> EnvFilter {
    if debug_mode {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Get default log file path (~/.tilestitch/logs/tilestitch.log).
pub fn default_log_path() -> PathBuf {
    crate::config::default_log_dir().join(crate::config::DEFAULT_LOG_FILE_NAME)
}
