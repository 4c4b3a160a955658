//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`plan`] - Preview a tile range without downloading
//! - [`presets`] - List built-in tile servers
//! - [`stitch`] - Download a tile range and save the composite

pub mod common;
pub mod config;
pub mod plan;
pub mod presets;
pub mod stitch;
