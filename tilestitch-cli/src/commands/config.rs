//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for locating,
//! viewing and creating the configuration file.

use clap::Subcommand;
use tilestitch::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration as INI
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file with defaults
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init { force } => run_init(force),
    }
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Print the effective configuration.
fn run_show() -> Result<(), CliError> {
    let path = config_file_path();
    let config = ConfigFile::load_from(&path)?;

    if path.exists() {
        println!("; Loaded from {}", path.display());
    } else {
        println!("; No file at {}, showing defaults", path.display());
    }
    print!("{}", config.to_ini_string());
    Ok(())
}

/// Create the configuration file.
fn run_init(force: bool) -> Result<(), CliError> {
    let path = config_file_path();

    if force {
        ConfigFile::default().save_to(&path)?;
        println!("Wrote default configuration to {}", path.display());
    } else if ConfigFile::ensure_exists_at(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
        println!("Use --force to replace it with defaults.");
    }
    Ok(())
}
