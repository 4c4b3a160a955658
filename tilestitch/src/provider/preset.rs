//! Built-in tile server presets.

use super::template::UrlTemplate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a preset name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown URL preset '{0}' (expected one of: osm, gsi-std, gsi-seamlessphoto)")]
pub struct UnknownPreset(pub String);

/// Built-in tile servers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UrlPreset {
    /// OpenStreetMap standard layer
    #[default]
    OpenStreetMap,
    /// GSI (Geospatial Information Authority of Japan) standard map
    GsiStandard,
    /// GSI seamless aerial photo
    GsiSeamlessPhoto,
}

impl UrlPreset {
    /// All presets in display order.
    pub const ALL: [UrlPreset; 3] = [
        UrlPreset::OpenStreetMap,
        UrlPreset::GsiStandard,
        UrlPreset::GsiSeamlessPhoto,
    ];

    /// Short identifier used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            UrlPreset::OpenStreetMap => "osm",
            UrlPreset::GsiStandard => "gsi-std",
            UrlPreset::GsiSeamlessPhoto => "gsi-seamlessphoto",
        }
    }

    /// Human-readable description.
    pub fn label(&self) -> &'static str {
        match self {
            UrlPreset::OpenStreetMap => "OpenStreetMap standard",
            UrlPreset::GsiStandard => "GSI standard map",
            UrlPreset::GsiSeamlessPhoto => "GSI seamless aerial photo",
        }
    }

    pub fn template_str(&self) -> &'static str {
        match self {
            UrlPreset::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            UrlPreset::GsiStandard => "https://cyberjapandata.gsi.go.jp/xyz/std/{z}/{x}/{y}.png",
            UrlPreset::GsiSeamlessPhoto => {
                "https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/{z}/{x}/{y}.jpg"
            }
        }
    }

    pub fn template(&self) -> UrlTemplate {
        UrlTemplate::from_static(self.template_str())
    }
}

impl fmt::Display for UrlPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UrlPreset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        UrlPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| UnknownPreset(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileCoord;

    #[test]
    fn test_default_is_osm() {
        assert_eq!(UrlPreset::default(), UrlPreset::OpenStreetMap);
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!("osm".parse(), Ok(UrlPreset::OpenStreetMap));
        assert_eq!("GSI-STD".parse(), Ok(UrlPreset::GsiStandard));
        assert_eq!(" gsi-seamlessphoto ".parse(), Ok(UrlPreset::GsiSeamlessPhoto));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bing".parse::<UrlPreset>().unwrap_err();
        assert_eq!(err, UnknownPreset("bing".to_string()));
    }

    #[test]
    fn test_name_round_trips() {
        for preset in UrlPreset::ALL {
            assert_eq!(preset.name().parse(), Ok(preset));
        }
    }

    #[test]
    fn test_templates_contain_all_tokens() {
        for preset in UrlPreset::ALL {
            assert!(preset.template().missing_tokens().is_empty(), "{}", preset);
        }
    }

    #[test]
    fn test_gsi_seamless_url() {
        let url = UrlPreset::GsiSeamlessPhoto
            .template()
            .url_for(&TileCoord::new(18, 229732, 104096));
        assert_eq!(
            url,
            "https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/18/229732/104096.jpg"
        );
    }
}
