//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use crate::provider::UrlPreset;
use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Tile source settings
    pub source: SourceSettings,
    /// Tile range settings
    pub range: RangeSettings,
    /// Download settings
    pub download: DownloadSettings,
    /// Output settings
    pub output: OutputSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Tile source configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    /// Built-in template used when `use_custom_url` is off
    pub preset: UrlPreset,
    /// Use `custom_url` instead of the preset
    pub use_custom_url: bool,
    /// Custom `{z}/{x}/{y}` template; may be empty while custom mode is off
    pub custom_url: String,
}

/// Tile range configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSettings {
    pub zoom: u8,
    pub top_left_x: u32,
    pub top_left_y: u32,
    pub bottom_right_x: u32,
    pub bottom_right_y: u32,
}

/// Download configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSettings {
    /// Timeout in seconds for HTTP requests.
    pub timeout: u64,
    /// Maximum concurrent tile downloads; 1 selects the sequential stitcher.
    pub parallel: usize,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Composite PNG path
    pub file: PathBuf,
    /// Directory that receives every fetched tile, if set
    pub tiles_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
