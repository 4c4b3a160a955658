//! Common types and utilities shared across CLI commands.

use clap::{Args, ValueEnum};
use tilestitch::config::{ConfigFile, DownloadConfig, StitchParams};
use tilestitch::provider::UrlPreset;

/// Tile server preset selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PresetArg {
    /// OpenStreetMap standard layer
    Osm,
    /// GSI standard map (Japan)
    #[value(name = "gsi-std")]
    GsiStd,
    /// GSI seamless aerial photo (Japan)
    #[value(name = "gsi-seamlessphoto")]
    GsiSeamlessphoto,
}

impl From<PresetArg> for UrlPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Osm => UrlPreset::OpenStreetMap,
            PresetArg::GsiStd => UrlPreset::GsiStandard,
            PresetArg::GsiSeamlessphoto => UrlPreset::GsiSeamlessPhoto,
        }
    }
}

/// Tile range and source flags shared by `stitch` and `plan`.
///
/// Every flag is optional; unset values come from the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct TargetArgs {
    /// Zoom level
    #[arg(long, short = 'z')]
    pub zoom: Option<u8>,

    /// X of the top-left tile
    #[arg(long)]
    pub top_left_x: Option<u32>,

    /// Y of the top-left tile
    #[arg(long)]
    pub top_left_y: Option<u32>,

    /// X of the bottom-right tile (inclusive)
    #[arg(long)]
    pub bottom_right_x: Option<u32>,

    /// Y of the bottom-right tile (inclusive)
    #[arg(long)]
    pub bottom_right_y: Option<u32>,

    /// Built-in tile server
    #[arg(long, value_enum, conflicts_with = "url")]
    pub preset: Option<PresetArg>,

    /// Custom URL template with {z}, {x} and {y} placeholders
    #[arg(long)]
    pub url: Option<String>,
}

/// Resolve stitch parameters: CLI flags take precedence, then config.
pub fn resolve_params(args: &TargetArgs, config: &ConfigFile) -> StitchParams {
    let mut params = config.params();

    if let Some(zoom) = args.zoom {
        params.zoom = zoom;
    }
    if let Some(x) = args.top_left_x {
        params.top_left_x = x;
    }
    if let Some(y) = args.top_left_y {
        params.top_left_y = y;
    }
    if let Some(x) = args.bottom_right_x {
        params.bottom_right_x = x;
    }
    if let Some(y) = args.bottom_right_y {
        params.bottom_right_y = y;
    }

    // An explicit preset switches custom mode off; an explicit URL turns it on.
    if let Some(preset) = args.preset {
        params.url_preset = preset.into();
        params.use_custom_url = false;
    }
    if let Some(url) = &args.url {
        params.custom_url = url.clone();
        params.use_custom_url = true;
    }

    params
}

/// Resolve download settings from CLI args and config.
pub fn resolve_download(
    cli_parallel: Option<usize>,
    cli_timeout: Option<u64>,
    config: &ConfigFile,
) -> DownloadConfig {
    DownloadConfig::new()
        .with_timeout_secs(cli_timeout.unwrap_or(config.download.timeout))
        .with_parallel(cli_parallel.unwrap_or(config.download.parallel))
}
