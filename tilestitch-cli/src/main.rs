//! TileStitch CLI - Command-line interface
//!
//! This binary provides a command-line interface to the TileStitch library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use commands::config::ConfigCommands;
use commands::plan::PlanArgs;
use commands::stitch::StitchArgs;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(version = tilestitch::VERSION)]
#[command(about = "Download slippy-map tiles and stitch them into one image", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a tile range and save it as one PNG
    Stitch(StitchArgs),

    /// Show the tile grid, image size and URLs without downloading
    Plan(PlanArgs),

    /// List the built-in tile servers
    Presets,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stitch(args) => commands::stitch::run(args),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Presets => commands::presets::run(),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
