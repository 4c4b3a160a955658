//! Stitch command - download a tile range and save the composite.

use clap::Args;
use std::path::PathBuf;
use tilestitch::config::{DownloadConfig, ValidatedParams};
use tilestitch::provider::{
    AsyncReqwestClient, AsyncTemplateProvider, ReqwestClient, TemplateProvider,
};
use tilestitch::stitch::{ParallelStitcher, Stitched, TileStitcher};
use tilestitch::store::{DirectoryTileStore, NullTileStore, TileStore};
use tracing::info;

use super::common::{resolve_download, resolve_params, TargetArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the stitch command.
#[derive(Debug, Args)]
pub struct StitchArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output PNG path [default: "Combined Image.png"]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Also keep every fetched tile in this directory
    #[arg(long, value_name = "DIR")]
    pub keep_tiles: Option<PathBuf>,

    /// Number of concurrent downloads (1 = sequential, at most 64)
    #[arg(long, short = 'j')]
    pub parallel: Option<usize>,

    /// HTTP request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Run the stitch command.
pub fn run(args: StitchArgs) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(args.debug)?;
    runner.log_startup("stitch");
    let config = runner.config();

    // Validate everything before touching the network
    let validated = resolve_params(&args.target, config).validate()?;
    let download = resolve_download(args.parallel, args.timeout, config);
    let output = args.output.unwrap_or_else(|| config.output.file.clone());
    let tiles_dir = args.keep_tiles.or_else(|| config.output.tiles_dir.clone());

    let range = validated.range;
    println!("Stitching tiles:");
    println!("  Template: {}", validated.template);
    println!("  Range: {}", range);
    println!("  Plan: {}", range.preview());
    if download.is_parallel() {
        println!("  Downloads: {} in parallel", download.parallel());
    }
    if let Some(dir) = &tiles_dir {
        println!("  Keeping tiles in: {}", dir.display());
    }
    println!();

    let stitched = match tiles_dir {
        Some(dir) => {
            let store = DirectoryTileStore::create(dir).map_err(CliError::TileStore)?;
            execute(&validated, download, store)?
        }
        None => execute(&validated, download, NullTileStore)?,
    };

    println!("Downloaded {}", stitched.summary());
    runner.save_composite(&stitched, &output)
}

/// Stitch with the sequential or the parallel driver, as configured.
fn execute<T: TileStore>(
    validated: &ValidatedParams,
    download: DownloadConfig,
    store: T,
) -> Result<Stitched, CliError> {
    let template = validated.template.clone();

    if !download.is_parallel() {
        info!(timeout = download.timeout_secs(), "Using sequential downloads");
        let client =
            ReqwestClient::with_timeout(download.timeout_secs()).map_err(CliError::HttpClient)?;
        let stitcher = TileStitcher::new(TemplateProvider::new(client, template)).with_store(store);
        return Ok(stitcher.stitch(&validated.range)?);
    }

    info!(
        timeout = download.timeout_secs(),
        parallel = download.parallel(),
        "Using parallel downloads"
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    runtime.block_on(async {
        let client = AsyncReqwestClient::with_timeout(download.timeout_secs())
            .map_err(CliError::HttpClient)?;
        let stitcher = ParallelStitcher::new(AsyncTemplateProvider::new(client, template))
            .with_concurrency(download.parallel())
            .with_store(store);

        Ok::<_, CliError>(stitcher.stitch(&validated.range).await?)
    })
}
