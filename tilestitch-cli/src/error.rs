//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;
use tilestitch::config::{ConfigFileError, ParamsError};
use tilestitch::provider::ProviderError;
use tilestitch::stitch::StitchError;
use tilestitch::store::StoreError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file error
    Config(ConfigFileError),
    /// Stitch parameters rejected before downloading
    InvalidParams(ParamsError),
    /// Failed to create the HTTP client
    HttpClient(ProviderError),
    /// Failed to prepare the tile directory
    TileStore(StoreError),
    /// Failed to start the async runtime
    Runtime(std::io::Error),
    /// Download, decode or save failed
    Stitch(StitchError),
    /// Output path already exists as a directory
    OutputIsDirectory(PathBuf),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::InvalidParams(e) => {
                eprintln!();
                eprintln!("Hint: {}", e.hint());
            }
            CliError::Stitch(StitchError::Fetch { .. }) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. No network access, or the tile server is down");
                eprintln!("  2. The zoom level or tile range is outside the server's coverage");
                eprintln!("  3. The server rejected the request (check its tile usage policy)");
            }
            CliError::Stitch(StitchError::Decode { .. }) => {
                eprintln!();
                eprintln!("The server did not return an image. Check the URL template with:");
                eprintln!("  tilestitch plan --url <template>");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Fix the value in the config file, or recreate it with:");
                eprintln!("  tilestitch config init --force");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidParams(e) => write!(f, "Invalid parameters: {}", e),
            CliError::HttpClient(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::TileStore(e) => write!(f, "Failed to prepare tile directory: {}", e),
            CliError::Runtime(e) => write!(f, "Failed to start async runtime: {}", e),
            CliError::Stitch(e) => write!(f, "Stitch failed: {}", e),
            CliError::OutputIsDirectory(path) => {
                write!(f, "Output path '{}' is a directory", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::InvalidParams(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::TileStore(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Stitch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ParamsError> for CliError {
    fn from(e: ParamsError) -> Self {
        CliError::InvalidParams(e)
    }
}

impl From<StitchError> for CliError {
    fn from(e: StitchError) -> Self {
        CliError::Stitch(e)
    }
}
