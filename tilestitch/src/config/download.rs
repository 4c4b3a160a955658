//! Download configuration.

use super::defaults::{
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_PARALLEL_DOWNLOADS, MAX_PARALLEL_DOWNLOADS,
};
use super::settings::DownloadSettings;

/// Configuration for tile downloading.
///
/// Groups the parameters that select and tune the stitcher's HTTP side,
/// providing sensible defaults while allowing customization.
///
/// # Example
///
/// ```
/// use tilestitch::config::DownloadConfig;
///
/// // Using defaults
/// let config = DownloadConfig::default();
/// assert_eq!(config.timeout_secs(), 30);
/// assert_eq!(config.parallel(), 1);
/// assert!(!config.is_parallel());
///
/// // Custom configuration
/// let config = DownloadConfig::new()
///     .with_timeout_secs(60)
///     .with_parallel(8);
/// assert!(config.is_parallel());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Per-request HTTP timeout (in seconds)
    timeout_secs: u64,
    /// Maximum number of concurrent downloads
    parallel: usize,
}

impl DownloadConfig {
    /// Create a new download configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP request timeout in seconds.
    ///
    /// Default: 30 seconds.
    pub fn with_timeout_secs(mut self, timeout: u64) -> Self {
        self.timeout_secs = timeout;
        self
    }

    /// Set the maximum number of concurrent downloads.
    ///
    /// Clamped to `1..=MAX_PARALLEL_DOWNLOADS`. Default: 1 (sequential).
    pub fn with_parallel(mut self, parallel: usize) -> Self {
        self.parallel = clamp_parallel(parallel);
        self
    }

    /// Get the HTTP request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Get the maximum number of concurrent downloads.
    pub fn parallel(&self) -> usize {
        self.parallel
    }

    /// Whether downloads should overlap.
    pub fn is_parallel(&self) -> bool {
        self.parallel > 1
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            parallel: DEFAULT_PARALLEL_DOWNLOADS,
        }
    }
}

/// Clamps a download concurrency to 1..=MAX_PARALLEL_DOWNLOADS, warning if clamped.
pub(crate) fn clamp_parallel(value: usize) -> usize {
    let clamped = value.clamp(1, MAX_PARALLEL_DOWNLOADS);
    if clamped != value {
        tracing::warn!(
            requested = value,
            max = MAX_PARALLEL_DOWNLOADS,
            "download.parallel out of range, clamping to {}",
            clamped
        );
    }
    clamped
}

impl From<&DownloadSettings> for DownloadConfig {
    fn from(settings: &DownloadSettings) -> Self {
        Self::new()
            .with_timeout_secs(settings.timeout)
            .with_parallel(settings.parallel)
    }
}
