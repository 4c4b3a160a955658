//! Tile grid stitching
//!
//! Downloads every tile of a [`TileRange`] and assembles them into one
//! composite RGBA image of `columns × 256` by `rows × 256` pixels. Tile
//! `(x, y)` always lands at pixel offset `((x - x0) * 256, (y - y0) * 256)`,
//! whatever order the tiles arrive in.
//!
//! Two drivers are provided:
//!
//! - [`TileStitcher`] fetches one tile at a time on the calling thread.
//! - [`ParallelStitcher`] overlaps downloads on a tokio runtime with a
//!   bounded number of requests in flight.
//!
//! Both abort on the first failure and never return a partial composite.

mod assembly;
mod error;
mod output;
mod parallel;
mod sequential;

pub use assembly::{decode_tile, new_canvas, place_tile};
pub use error::StitchError;
pub use output::{default_output_file, StitchSummary, Stitched, COMPOSITE_NAME};
pub use parallel::{ParallelStitcher, DEFAULT_CONCURRENCY};
pub use sequential::TileStitcher;

use crate::coord::TileRange;
use crate::provider::{ReqwestClient, TemplateProvider, UrlTemplate};
use thiserror::Error;

/// Errors from [`stitch_url`].
#[derive(Debug, Error)]
pub enum StitchUrlError {
    #[error(transparent)]
    Range(#[from] crate::coord::RangeError),

    #[error(transparent)]
    Client(#[from] crate::provider::ProviderError),

    #[error(transparent)]
    Stitch(#[from] StitchError),
}

/// Stitch the tiles between two corners using a default blocking HTTP client.
///
/// The range is validated before any request is made.
pub fn stitch_url(
    template: &UrlTemplate,
    zoom: u8,
    top_left: (u32, u32),
    bottom_right: (u32, u32),
) -> Result<Stitched, StitchUrlError> {
    let range = TileRange::new(zoom, top_left, bottom_right)?;
    let provider = TemplateProvider::new(ReqwestClient::new()?, template.clone());
    Ok(TileStitcher::new(provider).stitch(&range)?)
}
