//! Configuration for TileStitch.
//!
//! - [`ConfigFile`] mirrors `~/.tilestitch/config.ini`, one struct per section.
//! - [`StitchParams`] is the flat parameter set a stitch runs with; its
//!   [`validate`](StitchParams::validate) gate rejects inverted ranges and
//!   empty custom URLs before anything is downloaded.
//! - [`DownloadConfig`] groups the HTTP tuning knobs.
//!
//! # Example
//!
//! ```
//! use tilestitch::config::{ConfigFile, DownloadConfig};
//!
//! let config = ConfigFile::default();
//! let validated = config.params().validate().unwrap();
//! assert_eq!(validated.range.tile_count(), 54);
//!
//! let download = DownloadConfig::from(&config.download);
//! assert_eq!(download.timeout_secs(), 30);
//! ```

mod defaults;
mod download;
mod file;
mod params;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_log_dir, DEFAULT_BOTTOM_RIGHT, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_LOG_FILE_NAME,
    DEFAULT_PARALLEL_DOWNLOADS, DEFAULT_TOP_LEFT, DEFAULT_ZOOM, MAX_PARALLEL_DOWNLOADS,
};
pub use download::DownloadConfig;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use params::{ParamsError, StitchParams, ValidatedParams};
pub use parser::expand_tilde;
pub use settings::{
    ConfigFile, DownloadSettings, LoggingSettings, OutputSettings, RangeSettings, SourceSettings,
};
