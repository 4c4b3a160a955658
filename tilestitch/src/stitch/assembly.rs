//! Tile decoding and placement onto the composite canvas.

use super::StitchError;
use crate::coord::{TileCoord, TileRange, TILE_SIZE};
use image::{GenericImage, RgbaImage};

/// Allocate a transparent canvas covering the whole range.
pub fn new_canvas(range: &TileRange) -> RgbaImage {
    RgbaImage::new(range.pixel_width(), range.pixel_height())
}

/// Decode fetched bytes (PNG, JPEG, ...) into a 256×256 RGBA tile.
pub fn decode_tile(coord: &TileCoord, data: &[u8]) -> Result<RgbaImage, StitchError> {
    let img = image::load_from_memory(data).map_err(|e| StitchError::Decode {
        coord: *coord,
        reason: e.to_string(),
    })?;

    if img.width() != TILE_SIZE || img.height() != TILE_SIZE {
        return Err(StitchError::UnexpectedSize {
            coord: *coord,
            width: img.width(),
            height: img.height(),
        });
    }

    Ok(img.to_rgba8())
}

/// Copy a tile into its block of the canvas.
///
/// This is an exact copy of all four channels with no blending.
pub fn place_tile(
    canvas: &mut RgbaImage,
    range: &TileRange,
    coord: &TileCoord,
    tile: &RgbaImage,
) -> Result<(), StitchError> {
    let (x_offset, y_offset) = range
        .pixel_offset(coord)
        .ok_or(StitchError::OutOfRange { coord: *coord })?;

    canvas
        .copy_from(tile, x_offset, y_offset)
        .map_err(|_| StitchError::OutOfRange { coord: *coord })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    fn solid(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(TILE_SIZE, TILE_SIZE, Rgba(color))
    }

    #[test]
    fn test_canvas_dimensions() {
        let range = TileRange::new(4, (2, 3), (4, 3)).unwrap();
        let canvas = new_canvas(&range);
        assert_eq!(canvas.dimensions(), (768, 256));
        assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_decode_png_preserves_alpha() {
        let tile = solid([10, 20, 30, 40]);
        let decoded = decode_tile(&TileCoord::new(1, 0, 0), &encode(&tile, ImageFormat::Png)).unwrap();
        assert_eq!(decoded, tile);
    }

    #[test]
    fn test_decode_jpeg_is_opaque() {
        let rgb = image::RgbImage::from_pixel(TILE_SIZE, TILE_SIZE, image::Rgb([0, 200, 0]));
        let mut buffer = Cursor::new(Vec::new());
        rgb.write_to(&mut buffer, ImageFormat::Jpeg).unwrap();

        let decoded = decode_tile(&TileCoord::new(1, 0, 0), buffer.get_ref()).unwrap();
        assert_eq!(decoded.dimensions(), (TILE_SIZE, TILE_SIZE));
        assert_eq!(decoded.get_pixel(128, 128)[3], 255);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_tile(&TileCoord::new(1, 0, 0), b"<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, StitchError::Decode { .. }));
    }

    #[test]
    fn test_decode_wrong_size_fails() {
        let tile = RgbaImage::new(512, 512);
        let err = decode_tile(&TileCoord::new(1, 0, 0), &encode(&tile, ImageFormat::Png)).unwrap_err();
        assert!(matches!(
            err,
            StitchError::UnexpectedSize {
                width: 512,
                height: 512,
                ..
            }
        ));
    }

    #[test]
    fn test_place_tile_at_offset() {
        let range = TileRange::new(4, (2, 3), (3, 4)).unwrap();
        let mut canvas = new_canvas(&range);
        let red = solid([255, 0, 0, 255]);

        place_tile(&mut canvas, &range, &TileCoord::new(4, 3, 4), &red).unwrap();

        // Bottom-right block is red; its neighbours are untouched.
        assert_eq!(*canvas.get_pixel(256, 256), Rgba([255, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(511, 511), Rgba([255, 0, 0, 255]));
        assert_eq!(*canvas.get_pixel(255, 256), Rgba([0, 0, 0, 0]));
        assert_eq!(*canvas.get_pixel(256, 255), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_place_tile_outside_range() {
        let range = TileRange::new(4, (2, 3), (3, 4)).unwrap();
        let mut canvas = new_canvas(&range);

        let err = place_tile(&mut canvas, &range, &TileCoord::new(4, 9, 9), &solid([0; 4])).unwrap_err();
        assert!(matches!(err, StitchError::OutOfRange { .. }));
    }
}
