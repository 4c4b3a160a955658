//! Provider types and traits

use crate::coord::TileCoord;
use std::future::Future;
use thiserror::Error;

/// Errors that can occur while fetching a tile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    ClientBuild(String),
}

/// Source of encoded tile images.
///
/// Implementors return the raw bytes (typically PNG or JPEG) of one
/// 256×256 tile. Fetching is blocking.
pub trait TileSource: Send + Sync {
    /// URL the tile at `coord` is fetched from.
    fn tile_url(&self, coord: &TileCoord) -> String;

    /// Downloads the encoded image for `coord`.
    fn fetch_tile(&self, coord: &TileCoord) -> Result<Vec<u8>, ProviderError>;

    /// Returns the source's name for logging and identification.
    fn name(&self) -> &str;
}

/// Async counterpart of [`TileSource`], used by the parallel stitcher.
pub trait AsyncTileSource: Send + Sync {
    /// URL the tile at `coord` is fetched from.
    fn tile_url(&self, coord: &TileCoord) -> String;

    /// Downloads the encoded image for `coord` asynchronously.
    fn fetch_tile(
        &self,
        coord: &TileCoord,
    ) -> impl Future<Output = Result<Vec<u8>, ProviderError>> + Send;

    /// Returns the source's name for logging and identification.
    fn name(&self) -> &str;
}
