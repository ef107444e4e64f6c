//! Image probing - decode validation and intrinsic dimensions.

use std::io::Cursor;

use image::{GenericImageView, ImageReader};

use crate::error::ProcessingError;

/// Decode `data` and return its intrinsic pixel dimensions.
///
/// The full decode doubles as format validation: bytes that cannot be decoded
/// as an image are rejected here, before anything is written anywhere.
pub fn probe_dimensions(data: &[u8]) -> Result<(u32, u32), ProcessingError> {
    let cursor = Cursor::new(data);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| ProcessingError::UnsupportedFormat(e.to_string()))?;
    let img = reader
        .decode()
        .map_err(|e| ProcessingError::UnsupportedFormat(e.to_string()))?;

    Ok(img.dimensions())
}
