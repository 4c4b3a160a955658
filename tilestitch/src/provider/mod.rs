//! Tile source abstraction
//!
//! This module provides URL templates, the built-in presets, HTTP clients
//! and the [`TileSource`] traits the stitcher downloads tiles through.
//!
//! ```ignore
//! use tilestitch::provider::{ReqwestClient, TemplateProvider, TileSource, UrlPreset};
//! use tilestitch::coord::TileCoord;
//!
//! let provider = TemplateProvider::new(ReqwestClient::new()?, UrlPreset::OpenStreetMap.template());
//! let png = provider.fetch_tile(&TileCoord::new(18, 229732, 104096))?;
//! ```

mod http;
mod preset;
mod source;
mod template;
mod types;

pub use http::{AsyncHttpClient, AsyncReqwestClient, HttpClient, ReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use preset::{UnknownPreset, UrlPreset};
pub use source::{AsyncTemplateProvider, TemplateProvider};
pub use template::{tile_asset_name, tile_type_segment, url_extension, TemplateError, UrlTemplate};
pub use types::{AsyncTileSource, ProviderError, TileSource};

#[cfg(test)]
pub use http::tests::{MockAsyncHttpClient, MockHttpClient, RecordingHttpClient};
