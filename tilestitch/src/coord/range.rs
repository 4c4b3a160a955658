//! Rectangular tile ranges and their traversal.

use super::types::{RangeError, TileCoord, TILE_SIZE};
use std::fmt;

/// Largest number of tiles along one axis whose pixel extent fits in a `u32`.
const MAX_TILES_PER_AXIS: u64 = u32::MAX as u64 / TILE_SIZE as u64;

/// Largest RGBA composite buffer a range may require (4 GiB).
pub const MAX_COMPOSITE_BYTES: u64 = 4 * 1024 * 1024 * 1024;

/// Bytes of RGBA pixel data in one tile.
const TILE_BYTES: u64 = TILE_SIZE as u64 * TILE_SIZE as u64 * 4;

/// An inclusive rectangle of tiles at a single zoom level.
///
/// Built from a top-left and a bottom-right corner. Construction enforces
/// `left <= right` and `top <= bottom`, so a `TileRange` always covers at
/// least one tile.
///
/// # Example
///
/// ```
/// use tilestitch::coord::TileRange;
///
/// let range = TileRange::new(18, (229732, 104096), (229740, 104101)).unwrap();
/// assert_eq!(range.columns(), 9);
/// assert_eq!(range.rows(), 6);
/// assert_eq!((range.pixel_width(), range.pixel_height()), (2304, 1536));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRange {
    zoom: u8,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
}

impl TileRange {
    /// Create a range from `(x, y)` corners.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if the corners are inverted on either axis, the
    /// composite would exceed `u32::MAX` pixels along an axis, or its RGBA
    /// buffer would exceed [`MAX_COMPOSITE_BYTES`] (or `usize::MAX` on
    /// smaller targets).
    pub fn new(
        zoom: u8,
        top_left: (u32, u32),
        bottom_right: (u32, u32),
    ) -> Result<Self, RangeError> {
        let (left, top) = top_left;
        let (right, bottom) = bottom_right;

        if left > right {
            return Err(RangeError::InvertedColumns { left, right });
        }
        if top > bottom {
            return Err(RangeError::InvertedRows { top, bottom });
        }

        let columns = u64::from(right - left) + 1;
        let rows = u64::from(bottom - top) + 1;
        if columns > MAX_TILES_PER_AXIS || rows > MAX_TILES_PER_AXIS {
            return Err(RangeError::TooLarge { columns, rows });
        }

        let byte_limit = MAX_COMPOSITE_BYTES.min(usize::MAX as u64);
        let fits = columns
            .checked_mul(rows)
            .and_then(|tiles| tiles.checked_mul(TILE_BYTES))
            .is_some_and(|bytes| bytes <= byte_limit);
        if !fits {
            return Err(RangeError::TooLarge { columns, rows });
        }

        Ok(Self {
            zoom,
            left,
            top,
            right,
            bottom,
        })
    }

    /// Range covering a single tile.
    pub fn single(coord: TileCoord) -> Self {
        Self {
            zoom: coord.zoom,
            left: coord.x,
            top: coord.y,
            right: coord.x,
            bottom: coord.y,
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn top_left(&self) -> TileCoord {
        TileCoord::new(self.zoom, self.left, self.top)
    }

    pub fn bottom_right(&self) -> TileCoord {
        TileCoord::new(self.zoom, self.right, self.bottom)
    }

    /// Number of tile columns.
    pub fn columns(&self) -> u32 {
        self.right - self.left + 1
    }

    /// Number of tile rows.
    pub fn rows(&self) -> u32 {
        self.bottom - self.top + 1
    }

    pub fn tile_count(&self) -> u64 {
        u64::from(self.columns()) * u64::from(self.rows())
    }

    /// Width of the stitched composite in pixels.
    pub fn pixel_width(&self) -> u32 {
        self.columns() * TILE_SIZE
    }

    /// Height of the stitched composite in pixels.
    pub fn pixel_height(&self) -> u32 {
        self.rows() * TILE_SIZE
    }

    pub fn contains(&self, coord: &TileCoord) -> bool {
        coord.zoom == self.zoom
            && (self.left..=self.right).contains(&coord.x)
            && (self.top..=self.bottom).contains(&coord.y)
    }

    /// Top-left pixel of `coord`'s block within the composite.
    ///
    /// Tile `(x, y)` always occupies columns `[(x-left)*256, +256)` and rows
    /// `[(y-top)*256, +256)`. Returns `None` for coordinates outside the range.
    pub fn pixel_offset(&self, coord: &TileCoord) -> Option<(u32, u32)> {
        if !self.contains(coord) {
            return None;
        }
        Some((
            (coord.x - self.left) * TILE_SIZE,
            (coord.y - self.top) * TILE_SIZE,
        ))
    }

    /// Iterate over every tile in download order.
    ///
    /// Rows are visited from the bottom row upward; within a row tiles go
    /// west to east. Placement never depends on this order.
    pub fn tiles(&self) -> TileRangeIter {
        TileRangeIter {
            range: *self,
            current: 0,
            total: self.tile_count(),
        }
    }

    /// Summary of the grid and composite size, computed without any I/O.
    pub fn preview(&self) -> RangePreview {
        RangePreview {
            columns: self.columns(),
            rows: self.rows(),
            tile_count: self.tile_count(),
            pixel_width: self.pixel_width(),
            pixel_height: self.pixel_height(),
        }
    }
}

impl fmt::Display for TileRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "z{} ({},{})-({},{})",
            self.zoom, self.left, self.top, self.right, self.bottom
        )
    }
}

/// Iterator over all tiles of a [`TileRange`], bottom row first.
#[derive(Debug, Clone)]
pub struct TileRangeIter {
    range: TileRange,
    current: u64,
    total: u64,
}

impl Iterator for TileRangeIter {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.total {
            return None;
        }

        let columns = u64::from(self.range.columns());
        let rows_from_bottom = (self.current / columns) as u32;
        let column = (self.current % columns) as u32;

        self.current += 1;

        Some(TileCoord::new(
            self.range.zoom,
            self.range.left + column,
            self.range.bottom - rows_from_bottom,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.current).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileRangeIter {}

/// Grid and pixel dimensions of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePreview {
    pub columns: u32,
    pub rows: u32,
    pub tile_count: u64,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl fmt::Display for RangePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} tiles ({} total), {}x{} px",
            self.columns, self.rows, self.tile_count, self.pixel_width, self.pixel_height
        )
    }
}
