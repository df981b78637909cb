//! PNG output for rendered images.
//!
//! The viewer delivers images as in-memory buffers; the CLI also writes
//! them to disk.

use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageFormat, RgbaImage};

use crate::error::{ViewerError, Result};

use super::RenderedShape;

fn to_image(rendered: &RenderedShape) -> Result<RgbaImage> {
    let width = rendered.width() as u32;
    let height = rendered.height() as u32;

    ImageBuffer::from_raw(width, height, rendered.to_rgba_buffer()).ok_or_else(|| {
        ViewerError::Render {
            message: format!("Pixel grid of '{}' is not rectangular", rendered.name),
            help: None,
        }
    })
}

/// Encode a rendered image as PNG bytes.
pub fn encode_png(rendered: &RenderedShape) -> Result<Vec<u8>> {
    let img = to_image(rendered)?;

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ViewerError::Render {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;

    Ok(buffer.into_inner())
}

/// Write a rendered image to a PNG file.
pub fn write_png(rendered: &RenderedShape, path: &Path) -> Result<()> {
    let bytes = encode_png(rendered)?;
    std::fs::write(path, bytes).map_err(|e| ViewerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    fn checker() -> RenderedShape {
        RenderedShape::new(
            "test",
            vec![
                vec![Colour::BLACK, Colour::WHITE],
                vec![Colour::TRANSPARENT, Colour::new(255, 0, 0, 128)],
            ],
        )
    }

    #[test]
    fn test_encode_png_round_trip() {
        let bytes = encode_png(&checker()).unwrap();

        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_encode_png_is_deterministic() {
        assert_eq!(encode_png(&checker()).unwrap(), encode_png(&checker()).unwrap());
    }

    #[test]
    fn test_ragged_grid_is_rejected() {
        let ragged = RenderedShape::new("ragged", vec![vec![Colour::BLACK; 2], vec![Colour::BLACK]]);
        assert!(encode_png(&ragged).is_err());
    }

    #[test]
    fn test_write_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.png");

        write_png(&checker(), &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 2));
    }
}
