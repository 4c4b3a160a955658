//! Retention of fetched tiles as named assets.
//!
//! Every tile the stitcher downloads is offered to a [`TileStore`] under the
//! name `{type}-{z}-{x}-{y}`, where `type` is the URL path segment preceding
//! the `/{z}/{x}/{y}.{ext}` suffix. Stores receive the raw fetched bytes,
//! not the decoded pixels.

use crate::coord::TileCoord;
use crate::provider::{tile_asset_name, url_extension};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Extension used when the tile URL has none.
const DEFAULT_EXTENSION: &str = "png";

/// Errors raised while retaining a tile.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write tile to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Identity of a fetched tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileAsset {
    pub coord: TileCoord,
    /// `{type}-{z}-{x}-{y}`
    pub name: String,
    /// Extension of the fetched URL, without the dot
    pub extension: String,
}

impl TileAsset {
    /// Describe the tile fetched for `coord` from `url`.
    pub fn from_url(url: &str, coord: TileCoord) -> Self {
        Self {
            coord,
            name: tile_asset_name(url, &coord),
            extension: url_extension(url)
                .unwrap_or(DEFAULT_EXTENSION)
                .to_ascii_lowercase(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

/// Receiver for fetched tiles.
pub trait TileStore: Send + Sync {
    /// Keep the raw bytes of a fetched tile.
    fn retain(&self, asset: &TileAsset, data: &[u8]) -> Result<(), StoreError>;
}

/// Store that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTileStore;

impl TileStore for NullTileStore {
    fn retain(&self, _asset: &TileAsset, _data: &[u8]) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store that writes each tile to `<dir>/<name>.<ext>`.
#[derive(Debug, Clone)]
pub struct DirectoryTileStore {
    dir: PathBuf,
}

impl DirectoryTileStore {
    /// Create the store, creating `dir` if it does not exist.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, asset: &TileAsset) -> PathBuf {
        self.dir.join(asset.file_name())
    }
}

impl TileStore for DirectoryTileStore {
    fn retain(&self, asset: &TileAsset, data: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(asset);
        fs::write(&path, data).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(tile = %asset.coord, path = %path.display(), "Retained tile");
        Ok(())
    }
}

/// Store that keeps tiles in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryTileStore {
    tiles: Mutex<Vec<(TileAsset, Vec<u8>)>>,
}

impl MemoryTileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.lock().is_empty()
    }

    /// Names of the retained tiles in arrival order.
    pub fn names(&self) -> Vec<String> {
        self.tiles
            .lock()
            .iter()
            .map(|(asset, _)| asset.name.clone())
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.tiles
            .lock()
            .iter()
            .find(|(asset, _)| asset.name == name)
            .map(|(_, data)| data.clone())
    }
}

impl TileStore for MemoryTileStore {
    fn retain(&self, asset: &TileAsset, data: &[u8]) -> Result<(), StoreError> {
        self.tiles.lock().push((asset.clone(), data.to_vec()));
        Ok(())
    }
}
