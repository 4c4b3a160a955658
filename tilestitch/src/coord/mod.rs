//! Tile coordinates and rectangular tile ranges.
//!
//! Coordinates follow the slippy-map convention: `x` grows eastward and
//! `y` grows southward, both in `0..2^zoom`.

mod range;
mod types;

pub use range::{RangePreview, TileRange, TileRangeIter, MAX_COMPOSITE_BYTES};
pub use types::{RangeError, TileCoord, TILE_SIZE};
