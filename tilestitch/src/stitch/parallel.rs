//! Parallel tile grid stitcher.
//!
//! Tiles are independent, so their downloads can overlap. Each fetch runs
//! as a task in a [`JoinSet`] gated by a semaphore. Decoding runs on the
//! blocking pool so it never stalls the async workers. Finished tiles are
//! placed into the pre-allocated canvas by the driving task. Every tile owns
//! a disjoint block, so the composite is identical to the sequential one
//! whatever order downloads complete in.

use super::assembly::{decode_tile, new_canvas, place_tile};
use super::output::{StitchSummary, Stitched};
use super::StitchError;
use crate::coord::TileRange;
use crate::provider::AsyncTileSource;
use crate::store::{NullTileStore, TileAsset, TileStore};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

/// Default number of concurrent downloads.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Downloads a tile range with bounded concurrency and stitches it.
///
/// The first error drops the [`JoinSet`], which aborts every download
/// still in flight.
pub struct ParallelStitcher<S, T = NullTileStore> {
    source: Arc<S>,
    store: T,
    concurrency: usize,
}

impl<S: AsyncTileSource + 'static> ParallelStitcher<S, NullTileStore> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            store: NullTileStore,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl<S: AsyncTileSource + 'static, T: TileStore> ParallelStitcher<S, T> {
    /// Set the maximum number of concurrent downloads (at least 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Replace the tile store.
    pub fn with_store<U: TileStore>(self, store: U) -> ParallelStitcher<S, U> {
        ParallelStitcher {
            source: self.source,
            store,
            concurrency: self.concurrency,
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    /// Fetch every tile of `range` concurrently and stitch them into one composite.
    #[instrument(skip_all, fields(range = %range, concurrency = self.concurrency))]
    pub async fn stitch(&self, range: &TileRange) -> Result<Stitched, StitchError> {
        let start = Instant::now();
        // Allocated before any fetch starts.
        let mut canvas = new_canvas(range);
        let mut bytes_downloaded = 0u64;

        info!(
            columns = range.columns(),
            rows = range.rows(),
            width = range.pixel_width(),
            height = range.pixel_height(),
            source = self.source.name(),
            "Stitching tile range in parallel"
        );

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut downloads = JoinSet::new();

        for coord in range.tiles() {
            let source = Arc::clone(&self.source);
            let sem = Arc::clone(&semaphore);

            downloads.spawn(async move {
                let _permit = sem
                    .acquire()
                    .await
                    .map_err(|e| StitchError::Task(e.to_string()))?;

                let url = source.tile_url(&coord);
                let data = source
                    .fetch_tile(&coord)
                    .await
                    .map_err(|source| StitchError::Fetch { coord, source })?;
                let (data, tile) = off_runtime(move || {
                    decode_tile(&coord, &data).map(|tile| (data, tile))
                })
                .await??;

                Ok::<_, StitchError>((coord, url, data, tile))
            });
        }

        while let Some(joined) = downloads.join_next().await {
            let (coord, url, data, tile) = joined
                .map_err(|e| StitchError::Task(e.to_string()))?
                .inspect_err(|e| warn!(error = %e, "Tile download failed, aborting stitch"))?;
            bytes_downloaded += data.len() as u64;

            let asset = TileAsset::from_url(&url, coord);
            self.store
                .retain(&asset, &data)
                .map_err(|source| StitchError::Store {
                    name: asset.name.clone(),
                    source,
                })?;

            place_tile(&mut canvas, range, &coord, &tile)?;
            debug!(tile = %coord, name = %asset.name, bytes = data.len(), "Placed tile");
        }

        let summary = StitchSummary {
            tiles: range.tile_count(),
            width: canvas.width(),
            height: canvas.height(),
            bytes_downloaded,
            elapsed: start.elapsed(),
        };
        info!(%summary, "Stitch complete");

        Ok(Stitched::new(canvas, summary))
    }
}

/// Run CPU-bound work on tokio's blocking pool.
async fn off_runtime<R, F>(work: F) -> Result<R, StitchError>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| StitchError::Task(e.to_string()))
}
