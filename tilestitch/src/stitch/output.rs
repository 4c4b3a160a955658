//! Stitch results and composite output.

use super::StitchError;
use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the composite asset.
pub const COMPOSITE_NAME: &str = "Combined Image";

/// Default output file for the composite, relative to the working directory.
pub fn default_output_file() -> PathBuf {
    PathBuf::from(format!("{}.png", COMPOSITE_NAME))
}

/// Statistics gathered while stitching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StitchSummary {
    /// Number of tiles fetched and placed
    pub tiles: u64,
    /// Composite width in pixels
    pub width: u32,
    /// Composite height in pixels
    pub height: u32,
    /// Total encoded bytes downloaded
    pub bytes_downloaded: u64,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

impl fmt::Display for StitchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tiles, {}x{} px, {:.2} MB downloaded in {:.2}s",
            self.tiles,
            self.width,
            self.height,
            self.bytes_downloaded as f64 / 1_048_576.0,
            self.elapsed.as_secs_f64()
        )
    }
}

/// A finished composite image.
#[derive(Debug, Clone)]
pub struct Stitched {
    image: RgbaImage,
    summary: StitchSummary,
}

impl Stitched {
    pub(crate) fn new(image: RgbaImage, summary: StitchSummary) -> Self {
        Self { image, summary }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn summary(&self) -> &StitchSummary {
        &self.summary
    }

    /// Encode the composite as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), StitchError> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| StitchError::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    fn stitched() -> Stitched {
        let image = RgbaImage::from_pixel(256, 256, Rgba([1, 2, 3, 4]));
        Stitched::new(
            image,
            StitchSummary {
                tiles: 1,
                width: 256,
                height: 256,
                bytes_downloaded: 2 * 1_048_576,
                elapsed: Duration::from_millis(1500),
            },
        )
    }

    #[test]
    fn test_default_output_file() {
        assert_eq!(default_output_file(), PathBuf::from("Combined Image.png"));
    }

    #[test]
    fn test_summary_display() {
        assert_eq!(
            stitched().summary().to_string(),
            "1 tiles, 256x256 px, 2.00 MB downloaded in 1.50s"
        );
    }

    #[test]
    fn test_save_png_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(default_output_file());
        let result = stitched();

        result.save_png(&path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(&reloaded, result.image());
    }

    #[test]
    fn test_save_png_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.png");

        let err = stitched().save_png(&path).unwrap_err();
        assert!(matches!(err, StitchError::Save { .. }));
    }
}
