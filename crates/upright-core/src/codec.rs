//! Image byte decode/encode helpers.

use std::io::Cursor;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;

use crate::error::{OrientError, Result};

/// Default JPEG quality for corrected output.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Decode raw bytes into an image.
///
/// The format is sniffed from the bytes; unreadable input fails with
/// [`OrientError::Decode`].
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(OrientError::Decode("empty input".to_string()));
    }

    image::load_from_memory(bytes).map_err(|e| OrientError::Decode(e.to_string()))
}

/// Encode an image as JPEG bytes.
///
/// The image is flattened to RGB first: JPEG has no alpha channel, so any
/// transparency becomes an opaque fill.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();

    let mut buf = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| OrientError::Encode(e.to_string()))?;

    Ok(buf.into_inner())
}
