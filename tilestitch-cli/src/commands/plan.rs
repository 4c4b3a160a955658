//! Plan command - preview a stitch without downloading anything.

use clap::Args;
use tilestitch::config::ConfigFile;

use super::common::{resolve_params, TargetArgs};
use crate::error::CliError;

/// Default number of sample URLs printed.
const DEFAULT_SAMPLE_URLS: usize = 3;

/// Arguments for the plan command.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Number of tile URLs to print, in download order
    #[arg(long, default_value_t = DEFAULT_SAMPLE_URLS)]
    pub urls: usize,
}

/// Run the plan command.
pub fn run(args: PlanArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let validated = resolve_params(&args.target, &config).validate()?;
    let range = validated.range;
    let preview = range.preview();

    println!("Stitch plan");
    println!("===========");
    println!("  Template:  {}", validated.template);
    println!("  Range:     {}", range);
    println!("  Tiles:     {} x {} ({} total)", preview.columns, preview.rows, preview.tile_count);
    println!("  Composite: {} x {} px", preview.pixel_width, preview.pixel_height);
    println!("  Output:    {}", config.output.file.display());

    let missing = validated.template.missing_tokens();
    if !missing.is_empty() {
        println!();
        println!("Warning: template has no {} placeholder", missing.join(", "));
    }

    if args.urls > 0 {
        println!();
        println!("First tiles:");
        for coord in range.tiles().take(args.urls) {
            println!("  {}  {}", coord, validated.template.url_for(&coord));
        }
        if preview.tile_count > args.urls as u64 {
            println!("  ... and {} more", preview.tile_count - args.urls as u64);
        }
    }

    Ok(())
}
