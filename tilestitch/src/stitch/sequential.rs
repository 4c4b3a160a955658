//! Sequential tile grid stitcher.

use super::assembly::{decode_tile, new_canvas, place_tile};
use super::output::{StitchSummary, Stitched};
use super::StitchError;
use crate::coord::TileRange;
use crate::provider::TileSource;
use crate::store::{NullTileStore, TileAsset, TileStore};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Downloads a tile range one tile at a time and stitches it into one image.
///
/// Tiles are fetched bottom row first, west to east, on the calling thread.
/// The first fetch, decode or store failure aborts the stitch.
///
/// # Example
///
/// ```ignore
/// use tilestitch::coord::TileRange;
/// use tilestitch::provider::{ReqwestClient, TemplateProvider, UrlPreset};
/// use tilestitch::stitch::TileStitcher;
///
/// let provider = TemplateProvider::new(ReqwestClient::new()?, UrlPreset::OpenStreetMap.template());
/// let range = TileRange::new(18, (229732, 104096), (229740, 104101))?;
/// let stitched = TileStitcher::new(provider).stitch(&range)?;
/// assert_eq!(stitched.image().dimensions(), (2304, 1536));
/// ```
pub struct TileStitcher<S, T = NullTileStore> {
    source: S,
    store: T,
}

impl<S: TileSource> TileStitcher<S, NullTileStore> {
    /// Create a stitcher that does not retain fetched tiles.
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: NullTileStore,
        }
    }
}

impl<S: TileSource, T: TileStore> TileStitcher<S, T> {
    /// Replace the tile store.
    pub fn with_store<U: TileStore>(self, store: U) -> TileStitcher<S, U> {
        TileStitcher {
            source: self.source,
            store,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &T {
        &self.store
    }

    /// Fetch every tile of `range` and stitch them into one composite.
    #[instrument(skip_all, fields(range = %range, source = self.source.name()))]
    pub fn stitch(&self, range: &TileRange) -> Result<Stitched, StitchError> {
        let start = Instant::now();
        let mut canvas = new_canvas(range);
        let mut bytes_downloaded = 0u64;

        info!(
            columns = range.columns(),
            rows = range.rows(),
            width = range.pixel_width(),
            height = range.pixel_height(),
            "Stitching tile range"
        );

        for coord in range.tiles() {
            let url = self.source.tile_url(&coord);
            let data = self
                .source
                .fetch_tile(&coord)
                .map_err(|source| StitchError::Fetch { coord, source })?;
            bytes_downloaded += data.len() as u64;

            let tile = decode_tile(&coord, &data)?;

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
