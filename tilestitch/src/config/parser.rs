//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::download::clamp_parallel;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::provider::UrlPreset;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
/// Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [source] section
    if let Some(section) = ini.section(Some("source")) {
        if let Some(v) = section.get("preset") {
            config.source.preset =
                UrlPreset::from_str(v).map_err(|_| ConfigFileError::InvalidValue {
                    section: "source".to_string(),
                    key: "preset".to_string(),
                    value: v.to_string(),
                    reason: "must be one of: osm, gsi-std, gsi-seamlessphoto".to_string(),
                })?;
        }
        if let Some(v) = section.get("use_custom_url") {
            config.source.use_custom_url = parse_bool(v, "source", "use_custom_url")?;
        }
        if let Some(v) = section.get("custom_url") {
            config.source.custom_url = v.trim().to_string();
        }
    }

    // [range] section
    if let Some(section) = ini.section(Some("range")) {
        if let Some(v) = section.get("zoom") {
            config.range.zoom = parse_number(v, "range", "zoom", "must be an integer from 0 to 255")?;
        }
        for (key, field) in [
            ("top_left_x", &mut config.range.top_left_x),
            ("top_left_y", &mut config.range.top_left_y),
            ("bottom_right_x", &mut config.range.bottom_right_x),
            ("bottom_right_y", &mut config.range.bottom_right_y),
        ] {
            if let Some(v) = section.get(key) {
                *field = parse_number(v, "range", key, "must be a non-negative integer tile index")?;
            }
        }
    }

    // [download] section
    if let Some(section) = ini.section(Some("download")) {
        if let Some(v) = section.get("timeout") {
            let timeout: u64 =
                parse_number(v, "download", "timeout", "must be a positive integer (seconds)")?;
            if timeout == 0 {
                return Err(ConfigFileError::InvalidValue {
                    section: "download".to_string(),
                    key: "timeout".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer (seconds)".to_string(),
                });
            }
            config.download.timeout = timeout;
        }
        if let Some(v) = section.get("parallel") {
            let parsed: usize =
                parse_number(v, "download", "parallel", "must be a positive integer")?;
            config.download.parallel = clamp_parallel(parsed);
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.file = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("tiles_dir") {
            let v = v.trim();
            config.output.tiles_dir = (!v.is_empty()).then(|| expand_tilde(v));
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn parse_number<T: FromStr>(
    value: &str,
    section: &str,
    key: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        })
}

/// Parse a boolean value from a string.
///
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive). Anything
/// else is an `InvalidValue` for `section.key`.
pub(super) fn parse_bool(value: &str, section: &str, key: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be one of: true, false, yes, no, 1, 0, on, off".to_string(),
        }),
    }
}

/// Expand ~ to home directory in paths.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_full_config() {
        let config = load(
            r#"
[source]
preset = gsi-seamlessphoto
use_custom_url = yes
custom_url = https://tiles.example.com/base/{z}/{x}/{y}.png

[range]
zoom = 12
top_left_x = 3637
top_left_y = 1612
bottom_right_x = 3640
bottom_right_y = 1614

[download]
timeout = 10
parallel = 8

[output]
file = /tmp/out.png
tiles_dir = /tmp/tiles
"#,
        )
        .unwrap();

        assert_eq!(config.source.preset, UrlPreset::GsiSeamlessPhoto);
        assert!(config.source.use_custom_url);
        assert_eq!(
            config.source.custom_url,
            "https://tiles.example.com/base/{z}/{x}/{y}.png"
        );
        assert_eq!(config.range.zoom, 12);
        assert_eq!(config.range.top_left_x, 3637);
        assert_eq!(config.range.top_left_y, 1612);
        assert_eq!(config.range.bottom_right_x, 3640);
        assert_eq!(config.range.bottom_right_y, 1614);
        assert_eq!(config.download.timeout, 10);
        assert_eq!(config.download.parallel, 8);
        assert_eq!(config.output.file, PathBuf::from("/tmp/out.png"));
        assert_eq!(config.output.tiles_dir, Some(PathBuf::from("/tmp/tiles")));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = load("[range]\nzoom = 15\n").unwrap();

        assert_eq!(config.range.zoom, 15);
        assert_eq!(config.range.top_left_x, DEFAULT_TOP_LEFT.0);
        assert_eq!(config.download.timeout, DEFAULT_DOWNLOAD_TIMEOUT_SECS);
        assert_eq!(config.source.preset, UrlPreset::OpenStreetMap);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = load("[source]\nflavour = vanilla\n\n[extras]\nfoo = bar\n").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_invalid_preset() {
        let err = load("[source]\npreset = bing\n").unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section,
                key,
                value,
                ..
            } => {
                assert_eq!(section, "source");
                assert_eq!(key, "preset");
                assert_eq!(value, "bing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_tile_index() {
        let err = load("[range]\ntop_left_x = -3\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::InvalidValue { ref key, .. } if key == "top_left_x"
        ));
    }

    #[test]
    fn test_zoom_out_of_u8() {
        let err = load("[range]\nzoom = 300\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "zoom"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = load("[download]\ntimeout = 0\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { ref key, .. } if key == "timeout"));
    }

    #[test]
    fn test_parallel_clamped() {
        assert_eq!(load("[download]\nparallel = 0\n").unwrap().download.parallel, 1);
        assert_eq!(
            load("[download]\nparallel = 1000\n").unwrap().download.parallel,
            MAX_PARALLEL_DOWNLOADS
        );
    }

    #[test]
    fn test_empty_tiles_dir_is_none() {
        let config = load("[output]\ntiles_dir =\n").unwrap();
        assert!(config.output.tiles_dir.is_none());
    }

    #[test]
    fn test_parse_bool_values() {
        let parse = |v| parse_bool(v, "source", "use_custom_url").unwrap();
        assert!(parse("true"));
        assert!(parse("  YES "));
        assert!(parse("1"));
        assert!(parse("on"));
        assert!(!parse("false"));
        assert!(!parse("No"));
        assert!(!parse("0"));
        assert!(!parse("off"));
    }

    #[test]
    fn test_parse_bool_rejects_unknown_words() {
        for value in ["maybe", "ture", ""] {
            let err = parse_bool(value, "source", "use_custom_url").unwrap_err();
            assert!(matches!(
                err,
                ConfigFileError::InvalidValue { ref section, ref key, .. }
                    if section == "source" && key == "use_custom_url"
            ));
        }
    }

    #[test]
    fn test_misspelled_custom_url_flag_is_an_error() {
        let err = load(
            "[source]\nuse_custom_url = ture\ncustom_url = https://t.example/{z}/{x}/{y}.png\n",
        )
        .unwrap_err();
        match err {
            ConfigFileError::InvalidValue {
                section,
                key,
                value,
                ..
            } => {
                assert_eq!(section, "source");
                assert_eq!(key, "use_custom_url");
                assert_eq!(value.trim(), "ture");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/tiles"), home.join("tiles"));
        }
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative~/x"), PathBuf::from("relative~/x"));
    }
}
