//! Coordinate type definitions

use std::fmt;
use thiserror::Error;

/// Edge length of a slippy-map tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Tile coordinates in the Web Mercator / Slippy Map system.
///
/// `x` grows eastward and `y` grows southward. Valid values are
/// `0..2^zoom`, but nothing here enforces that: out-of-range coordinates
/// are passed to the tile server as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Zoom level
    pub zoom: u8,
    /// X coordinate (west-east), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
}

impl TileCoord {
    pub fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Errors raised when building a [`super::TileRange`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Top-left column lies east of the bottom-right column
    #[error("top-left X ({left}) must not be greater than bottom-right X ({right})")]
    InvertedColumns { left: u32, right: u32 },

    /// Top-left row lies south of the bottom-right row
    #[error("top-left Y ({top}) must not be greater than bottom-right Y ({bottom})")]
    InvertedRows { top: u32, bottom: u32 },

    /// Composite image would not fit in 32-bit pixel dimensions or in memory
    #[error("range of {columns}x{rows} tiles is too large to stitch into one image")]
    TooLarge { columns: u64, rows: u64 },
}
