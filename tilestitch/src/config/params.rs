//! Invocation parameters and the validation gate.
//!
//! [`StitchParams`] is the flat set of values a stitch is started with. It
//! is only turned into a [`TileRange`] and [`UrlTemplate`] by
//! [`StitchParams::validate`], which runs before any network access.

use super::settings::ConfigFile;
use crate::coord::{RangeError, TileRange};
use crate::provider::{UrlPreset, UrlTemplate};
use thiserror::Error;
use tracing::warn;

/// Errors that reject parameters before any tile is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// Corners are inverted or the composite would be too large
    #[error(transparent)]
    Range(#[from] RangeError),

    /// Custom URL mode is on but no URL was given
    #[error("custom URL mode is enabled but the custom URL is empty")]
    EmptyCustomUrl,
}

impl ParamsError {
    /// Suggestion shown to the user next to the error.
    pub fn hint(&self) -> &'static str {
        match self {
            ParamsError::Range(RangeError::InvertedColumns { .. }) => {
                "top-left x must not be greater than bottom-right x"
            }
            ParamsError::Range(RangeError::InvertedRows { .. }) => {
                "top-left y must not be greater than bottom-right y (y grows southward)"
            }
            ParamsError::Range(RangeError::TooLarge { .. }) => "choose a smaller tile range",
            ParamsError::EmptyCustomUrl => {
                "set a URL template containing {z}, {x} and {y}, or switch back to a preset"
            }
        }
    }
}

/// Parameters of one stitch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StitchParams {
    pub zoom: u8,
    pub top_left_x: u32,
    pub top_left_y: u32,
    pub bottom_right_x: u32,
    pub bottom_right_y: u32,
    pub use_custom_url: bool,
    pub custom_url: String,
    pub url_preset: UrlPreset,
}

/// Parameters that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedParams {
    pub range: TileRange,
    pub template: UrlTemplate,
}

impl StitchParams {
    /// Tile range described by the corners.
    pub fn range(&self) -> Result<TileRange, RangeError> {
        TileRange::new(
            self.zoom,
            (self.top_left_x, self.top_left_y),
            (self.bottom_right_x, self.bottom_right_y),
        )
    }

    /// Template in effect: the custom URL in custom mode, else the preset.
    pub fn template(&self) -> Result<UrlTemplate, ParamsError> {
        if !self.use_custom_url {
            return Ok(self.url_preset.template());
        }
        UrlTemplate::parse(&self.custom_url).map_err(|_| ParamsError::EmptyCustomUrl)
    }

    /// Check the range and template, returning both on success.
    pub fn validate(&self) -> Result<ValidatedParams, ParamsError> {
        let range = self.range()?;
        let template = self.template()?;

        let missing = template.missing_tokens();
        if !missing.is_empty() {
            warn!(
                template = %template,
                missing = ?missing,
                "URL template lacks placeholders; tiles along that axis will share one URL"
            );
        }

        Ok(ValidatedParams { range, template })
    }

    /// Whether [`StitchParams::validate`] would succeed.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for StitchParams {
    fn default() -> Self {
        ConfigFile::default().params()
    }
}

impl ConfigFile {
    /// Stitch parameters described by the `[source]` and `[range]` sections.
    pub fn params(&self) -> StitchParams {
        StitchParams {
            zoom: self.range.zoom,
            top_left_x: self.range.top_left_x,
            top_left_y: self.range.top_left_y,
            bottom_right_x: self.range.bottom_right_x,
            bottom_right_y: self.range.bottom_right_y,
            use_custom_url: self.source.use_custom_url,
            custom_url: self.source.custom_url.clone(),
            url_preset: self.source.preset,
        }
    }
}
