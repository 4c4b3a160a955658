//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;
use crate::provider::UrlPreset;
use crate::stitch::default_output_file;

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 18;

/// Default top-left tile `(x, y)`.
pub const DEFAULT_TOP_LEFT: (u32, u32) = (229732, 104096);

/// Default bottom-right tile `(x, y)`.
pub const DEFAULT_BOTTOM_RIGHT: (u32, u32) = (229740, 104101);

/// Default HTTP timeout in seconds.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = crate::provider::DEFAULT_TIMEOUT_SECS;

/// Default number of concurrent downloads (sequential).
pub const DEFAULT_PARALLEL_DOWNLOADS: usize = 1;

/// Upper bound for `[download] parallel`.
pub const MAX_PARALLEL_DOWNLOADS: usize = 64;

/// Default log file name inside the logs directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "tilestitch.log";

/// Default log directory (~/.tilestitch/logs).
pub fn default_log_dir() -> std::path::PathBuf {
    config_directory().join("logs")
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            preset: UrlPreset::default(),
            use_custom_url: false,
            custom_url: String::new(),
        }
    }
}

impl Default for RangeSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            top_left_x: DEFAULT_TOP_LEFT.0,
            top_left_y: DEFAULT_TOP_LEFT.1,
            bottom_right_x: DEFAULT_BOTTOM_RIGHT.0,
            bottom_right_y: DEFAULT_BOTTOM_RIGHT.1,
        }
    }
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            parallel: DEFAULT_PARALLEL_DOWNLOADS,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            tiles_dir: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_dir().join(DEFAULT_LOG_FILE_NAME),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            source: SourceSettings::default(),
            range: RangeSettings::default(),
            download: DownloadSettings::default(),
            output: OutputSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
