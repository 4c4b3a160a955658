//! TileStitch - download slippy-map tiles and stitch them into one image
//!
//! This library fetches every tile of a rectangular `{z}/{x}/{y}` range from
//! a tile server and assembles them into a single RGBA composite of
//! `columns × 256` by `rows × 256` pixels.
//!
//! # High-Level API
//!
//! ```ignore
//! use tilestitch::config::StitchParams;
//! use tilestitch::provider::{ReqwestClient, TemplateProvider};
//! use tilestitch::stitch::{default_output_file, TileStitcher};
//!
//! let validated = StitchParams::default().validate()?;
//! let provider = TemplateProvider::new(ReqwestClient::new()?, validated.template);
//! let stitched = TileStitcher::new(provider).stitch(&validated.range)?;
//! stitched.save_png(&default_output_file())?;
//! ```

pub mod config;
pub mod coord;
pub mod logging;
pub mod provider;
pub mod stitch;
pub mod store;

/// Version of the TileStitch library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
