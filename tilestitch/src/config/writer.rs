//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let tiles_dir = config
        .output
        .tiles_dir
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[source]
; Built-in tile server, used unless use_custom_url = true:
;   osm               - OpenStreetMap standard (https://tile.openstreetmap.org)
;   gsi-std           - GSI standard map (cyberjapandata.gsi.go.jp)
;   gsi-seamlessphoto - GSI seamless aerial photo (cyberjapandata.gsi.go.jp)
preset = {}
; Use custom_url instead of the preset
use_custom_url = {}
; Custom tile URL template with {{z}}, {{x}} and {{y}} placeholders
; Example: custom_url = https://tiles.example.com/base/{{z}}/{{x}}/{{y}}.png
custom_url = {}

[range]
; Zoom level of the tiles to fetch (default: 18)
zoom = {}
; Top-left tile (x grows east, y grows south)
top_left_x = {}
top_left_y = {}
; Bottom-right tile, inclusive
bottom_right_x = {}
bottom_right_y = {}

[download]
; Timeout in seconds for each HTTP request (default: 30)
timeout = {}
; Number of tiles downloaded concurrently (default: 1, sequential)
; Please respect the tile server's usage policy before raising this
parallel = {}

[output]
; Path of the stitched PNG (default: "Combined Image.png" in the current directory)
file = {}
; Directory receiving every fetched tile as <type>-<z>-<x>-<y>.<ext>
; If empty, fetched tiles are not kept
tiles_dir = {}

[logging]
; Log file path (cleared at the start of each run)
file = {}
"#,
        config.source.preset,
        config.source.use_custom_url,
        config.source.custom_url,
        config.range.zoom,
        config.range.top_left_x,
        config.range.top_left_y,
        config.range.bottom_right_x,
        config.range.bottom_right_y,
        config.download.timeout,
        config.download.parallel,
        path_to_string(&config.output.file),
        tiles_dir,
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
