//! Error types for stitching.

use crate::coord::TileCoord;
use crate::provider::ProviderError;
use crate::store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a stitch.
///
/// No variant is recovered locally: the first failure ends the operation
/// and no partial composite is returned.
#[derive(Debug, Error)]
pub enum StitchError {
    /// Downloading a tile failed
    #[error("failed to fetch tile {coord}: {source}")]
    Fetch {
        coord: TileCoord,
        #[source]
        source: ProviderError,
    },

    /// Tile bytes are not a decodable image
    #[error("failed to decode tile {coord}: {reason}")]
    Decode { coord: TileCoord, reason: String },

    /// Decoded tile is not 256×256
    #[error("tile {coord} is {width}x{height} pixels, expected 256x256")]
    UnexpectedSize {
        coord: TileCoord,
        width: u32,
        height: u32,
    },

    /// Tile does not belong to the range being stitched
    #[error("tile {coord} lies outside the stitched range")]
    OutOfRange { coord: TileCoord },

    /// Tile store rejected a fetched tile
    #[error("failed to retain tile '{name}': {source}")]
    Store {
        name: String,
        #[source]
        source: StoreError,
    },

    /// A download task panicked or was cancelled
    #[error("tile download task failed: {0}")]
    Task(String),

    /// Writing the composite image failed
    #[error("failed to write composite image to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_display_includes_coord() {
        let err = StitchError::Fetch {
            coord: TileCoord::new(18, 1, 2),
            source: ProviderError::Http("connection refused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch tile 18/1/2: HTTP error: connection refused"
        );
    }

    #[test]
    fn test_unexpected_size_display() {
        let err = StitchError::UnexpectedSize {
            coord: TileCoord::new(3, 0, 0),
            width: 512,
            height: 512,
        };
        assert_eq!(
            err.to_string(),
            "tile 3/0/0 is 512x512 pixels, expected 256x256"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = StitchError::Fetch {
            coord: TileCoord::new(1, 0, 0),
            source: ProviderError::Http("boom".to_string()),
        };
        assert!(err.source().is_some());
    }
}
