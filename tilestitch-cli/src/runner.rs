//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and output file
//! handling to reduce duplication across command handlers.

use crate::error::CliError;
use std::path::Path;
use tilestitch::config::ConfigFile;
use tilestitch::logging::{init_logging, LoggingGuard};
use tilestitch::stitch::Stitched;
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner with optional debug logging.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(&config.logging.file, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("TileStitch v{}", tilestitch::VERSION);
        info!(
            log_file = %self.logging_guard.log_path().display(),
            "TileStitch CLI: {} command",
            command
        );
    }

    /// Save the composite as PNG.
    pub fn save_composite(&self, stitched: &Stitched, path: &Path) -> Result<(), CliError> {
        if path.is_dir() {
            return Err(CliError::OutputIsDirectory(path.to_path_buf()));
        }

        println!("Saving composite...");
        stitched.save_png(path)?;

        let size_mb = std::fs::metadata(path)
            .map(|m| m.len() as f64 / 1_048_576.0)
            .unwrap_or(0.0);
        let (width, height) = stitched.image().dimensions();
        info!(path = %path.display(), width, height, "Composite saved");
        println!("✓ Saved successfully: {} ({:.2} MB)", path.display(), size_mb);
        println!("  Dimensions: {}×{}", width, height);

        Ok(())
    }
}
