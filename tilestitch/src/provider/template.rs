//! Tile URL templates.
//!
//! A template is a URL containing the literal tokens `{z}`, `{x}` and `{y}`,
//! e.g. `https://tile.openstreetmap.org/{z}/{x}/{y}.png`. Substitution is a
//! plain string replacement of every occurrence of each token.

use crate::coord::TileCoord;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Substitution tokens recognized in a template.
pub const TOKENS: [&str; 3] = ["{z}", "{x}", "{y}"];

/// Segment used when a URL does not end in `/<z>/<x>/<y>.<ext>`.
const FALLBACK_TILE_TYPE: &str = "tile";

/// Errors raised when parsing a URL template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Template string is empty or whitespace
    #[error("URL template is empty")]
    Empty,
}

/// A validated tile URL template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    /// Parse a template, trimming surrounding whitespace.
    ///
    /// Only emptiness is rejected. A template missing one of the tokens is
    /// accepted (every tile then hits the same URL for that axis); see
    /// [`UrlTemplate::missing_tokens`].
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let template = template.trim();
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }
        Ok(Self(template.to_string()))
    }

    /// Construct from a known-good static template.
    pub(crate) fn from_static(template: &'static str) -> Self {
        Self(template.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tokens that do not appear anywhere in the template.
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        TOKENS
            .iter()
            .copied()
            .filter(|token| !self.0.contains(token))
            .collect()
    }

    /// Substitute the coordinate into the template.
    pub fn url_for(&self, coord: &TileCoord) -> String {
        self.0
            .replace("{z}", &coord.zoom.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UrlTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Pattern capturing the path segment before a trailing `/<z>/<x>/<y>.<ext>`.
fn tile_type_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"([^/]+)/\d+/\d+/\d+\.\w+$").expect("tile type pattern is valid")
    })
}

/// Extract the tile type segment from a substituted tile URL.
///
/// For `https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/18/1/2.jpg` this is
/// `seamlessphoto`; for OpenStreetMap's `https://tile.openstreetmap.org/18/1/2.png`
/// it is the host name.
pub fn tile_type_segment(url: &str) -> Option<&str> {
    tile_type_pattern()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Asset name under which a fetched tile is retained: `{type}-{z}-{x}-{y}`.
pub fn tile_asset_name(url: &str, coord: &TileCoord) -> String {
    let tile_type = tile_type_segment(url).unwrap_or(FALLBACK_TILE_TYPE);
    format!("{}-{}-{}-{}", tile_type, coord.zoom, coord.x, coord.y)
}

/// File extension of the URL path, ignoring query string and fragment.
pub fn url_extension(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let last_segment = path.rsplit('/').next()?;
    let (stem, ext) = last_segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSM: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
    const GSI_PHOTO: &str = "https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/{z}/{x}/{y}.jpg";

    #[test]
    fn test_url_for_substitutes_all_tokens() {
        let template = UrlTemplate::parse(OSM).unwrap();
        let url = template.url_for(&TileCoord::new(18, 229732, 104096));
        assert_eq!(url, "https://tile.openstreetmap.org/18/229732/104096.png");
    }

    #[test]
    fn test_url_for_replaces_repeated_tokens() {
        let template = UrlTemplate::parse("https://t/{z}/{x}/{y}?cache={z}-{x}").unwrap();
        let url = template.url_for(&TileCoord::new(3, 1, 2));
        assert_eq!(url, "https://t/3/1/2?cache=3-1");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let template = UrlTemplate::parse("  https://t/{z}/{x}/{y}.png \n").unwrap();
        assert_eq!(template.as_str(), "https://t/{z}/{x}/{y}.png");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(UrlTemplate::parse(""), Err(TemplateError::Empty));
        assert_eq!(UrlTemplate::parse("   "), Err(TemplateError::Empty));
    }

    #[test]
    fn test_missing_tokens() {
        let template = UrlTemplate::parse("https://t/{z}/static.png").unwrap();
        assert_eq!(template.missing_tokens(), vec!["{x}", "{y}"]);
        assert!(UrlTemplate::parse(OSM).unwrap().missing_tokens().is_empty());
    }

    #[test]
    fn test_from_str() {
        let template: UrlTemplate = OSM.parse().unwrap();
        assert_eq!(template.to_string(), OSM);
    }

    #[test]
    fn test_tile_type_segment_gsi() {
        let url = "https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/18/229732/104096.jpg";
        assert_eq!(tile_type_segment(url), Some("seamlessphoto"));
    }

    #[test]
    fn test_tile_type_segment_osm_uses_host() {
        let url = "https://tile.openstreetmap.org/18/229732/104096.png";
        assert_eq!(tile_type_segment(url), Some("tile.openstreetmap.org"));
    }

    #[test]
    fn test_tile_type_segment_no_match() {
        assert_eq!(tile_type_segment("https://t/tiles?x=1&y=2&z=3"), None);
    }

    #[test]
    fn test_tile_asset_name() {
        let template = UrlTemplate::parse(GSI_PHOTO).unwrap();
        let coord = TileCoord::new(18, 229732, 104096);
        let name = tile_asset_name(&template.url_for(&coord), &coord);
        assert_eq!(name, "seamlessphoto-18-229732-104096");
    }

    #[test]
    fn test_tile_asset_name_fallback() {
        let coord = TileCoord::new(3, 1, 2);
        assert_eq!(tile_asset_name("https://t/q?x=1", &coord), "tile-3-1-2");
    }

    #[test]
    fn test_url_extension() {
        assert_eq!(url_extension("https://t/1/2/3.png"), Some("png"));
        assert_eq!(url_extension("https://t/1/2/3.jpg?key=abc"), Some("jpg"));
        assert_eq!(url_extension("https://t/tiles?x=1.5"), None);
        assert_eq!(url_extension("https://t/1/2/3"), None);
    }
}
