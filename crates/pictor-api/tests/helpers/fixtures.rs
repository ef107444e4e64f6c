//! Encoded image fixtures for upload tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Solid-color JPEG of the given dimensions.
pub fn jpeg_image(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

/// Solid-color PNG of the given dimensions.
pub fn png_image(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    // RGB rather than RGBA: the jpeg encoder rejects alpha channels.
    let img = RgbImage::from_pixel(width, height, Rgb([110, 140, 60]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, format)
        .expect("encode fixture image");
    buf.into_inner()
}
