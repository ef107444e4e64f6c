//! Thumbnail derivation.
//!
//! Thumbnailing is a size-reduction-only operation: sources whose larger
//! dimension is already at or below the target are returned as `None` rather
//! than upscaled.

use std::io::Cursor;

use bytes::Bytes;
use image::{imageops::FilterType, GenericImageView, ImageReader};

use crate::error::ProcessingError;

/// Largest axis of a derived thumbnail, in pixels.
pub const THUMBNAIL_MAX_DIMENSION: u32 = 640;

/// WebP encoding quality for thumbnails.
pub const WEBP_QUALITY: f32 = 80.0;

/// Content type of every derived thumbnail.
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/webp";

/// A derived thumbnail: encoded bytes plus resulting dimensions.
#[derive(Debug, Clone)]
pub struct DerivedThumbnail {
    pub bytes: Bytes,
    pub width: u32,
    pub height: u32,
}

/// Derives WebP thumbnails from source image bytes.
#[derive(Debug, Clone, Copy)]
pub struct Thumbnailer {
    max_dimension: u32,
    quality: f32,
}

impl Default for Thumbnailer {
    fn default() -> Self {
        Thumbnailer {
            max_dimension: THUMBNAIL_MAX_DIMENSION,
            quality: WEBP_QUALITY,
        }
    }
}

impl Thumbnailer {
    pub fn new(max_dimension: u32, quality: f32) -> Self {
        Thumbnailer {
            max_dimension,
            quality,
        }
    }

    /// Derive a thumbnail from `data`.
    ///
    /// Returns `Ok(None)` when the source is already at or below the target
    /// size. Fails with `UnsupportedFormat` when the bytes cannot be decoded
    /// as an image.
    pub fn derive(&self, data: &[u8]) -> Result<Option<DerivedThumbnail>, ProcessingError> {
        let cursor = Cursor::new(data);
        let reader = ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| ProcessingError::UnsupportedFormat(e.to_string()))?;
        let img = reader
            .decode()
            .map_err(|e| ProcessingError::UnsupportedFormat(e.to_string()))?;

        let (width, height) = img.dimensions();
        if width.max(height) <= self.max_dimension {
            tracing::debug!(
                width,
                height,
                max_dimension = self.max_dimension,
                "Source at or below thumbnail size, skipping derivation"
            );
            return Ok(None);
        }

        let (target_width, target_height) = scaled_dimensions(width, height, self.max_dimension);
        let filter = select_filter(width, height, target_width, target_height);
        let resized = img.resize_exact(target_width, target_height, filter);

        // Convert to RGBA for WebP encoding
        let rgba_img = resized.to_rgba8();
        let encoder = webp::Encoder::from_rgba(&rgba_img, target_width, target_height);
        let webp_data = encoder.encode(self.quality);

        if webp_data.is_empty() {
            return Err(ProcessingError::Encode(
                "WebP encoder produced no output".to_string(),
            ));
        }

        Ok(Some(DerivedThumbnail {
            bytes: Bytes::copy_from_slice(&webp_data),
            width: target_width,
            height: target_height,
        }))
    }
}

/// Aspect-preserving target dimensions with the larger axis at `max_dimension`.
fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width >= height {
        let scale = max_dimension as f32 / width as f32;
        let h = (height as f32 * scale).round() as u32;
        (max_dimension, h.max(1))
    } else {
        let scale = max_dimension as f32 / height as f32;
        let w = (width as f32 * scale).round() as u32;
        (w.max(1), max_dimension)
    }
}

/// Select filter type based on resize ratio: cheaper filters for aggressive
/// downscales, Lanczos3 for mild ones.
fn select_filter(orig_width: u32, orig_height: u32, new_width: u32, new_height: u32) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn create_test_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([0, 128, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, format).unwrap();
        buffer
    }

    #[test]
    fn test_small_source_is_not_upscaled() {
        let data = create_test_image(50, 50, ImageFormat::Png);
        let result = Thumbnailer::default().derive(&data).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_source_at_threshold_is_skipped() {
        let data = create_test_image(640, 320, ImageFormat::Png);
        let result = Thumbnailer::default().derive(&data).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_landscape_source_is_reduced() {
        let data = create_test_image(2000, 1000, ImageFormat::Jpeg);
        let thumbnail = Thumbnailer::default().derive(&data).unwrap().unwrap();

        assert_eq!(thumbnail.width, 640);
        assert_eq!(thumbnail.height, 320);
        assert!(thumbnail.width < 2000);
    }

    #[test]
    fn test_portrait_source_is_reduced_on_height() {
        let data = create_test_image(1000, 2000, ImageFormat::Png);
        let thumbnail = Thumbnailer::default().derive(&data).unwrap().unwrap();

        assert_eq!(thumbnail.width, 320);
        assert_eq!(thumbnail.height, 640);
    }

    #[test]
    fn test_thumbnail_bytes_are_webp() {
        let data = create_test_image(800, 800, ImageFormat::Png);
        let thumbnail = Thumbnailer::default().derive(&data).unwrap().unwrap();

        // RIFF....WEBP container magic
        assert_eq!(&thumbnail.bytes[0..4], b"RIFF");
        assert_eq!(&thumbnail.bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_undecodable_input_is_rejected() {
        let result = Thumbnailer::default().derive(b"definitely not an image");
        assert!(matches!(result, Err(ProcessingError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_scaled_dimensions_preserve_aspect() {
        assert_eq!(scaled_dimensions(2000, 1000, 640), (640, 320));
        assert_eq!(scaled_dimensions(1000, 2000, 640), (320, 640));
        // Extreme aspect ratios never collapse to zero
        assert_eq!(scaled_dimensions(4000, 1, 640), (640, 1));
    }

    #[test]
    fn test_select_filter_by_ratio() {
        assert!(matches!(
            select_filter(2000, 1000, 640, 320),
            FilterType::Triangle
        ));
        assert!(matches!(
            select_filter(1200, 600, 640, 320),
            FilterType::CatmullRom
        ));
        assert!(matches!(
            select_filter(700, 350, 640, 320),
            FilterType::Lanczos3
        ));
    }
}
