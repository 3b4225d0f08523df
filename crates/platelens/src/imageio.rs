//! Image loading collaborator.
//!
//! Reads a food photo from disk, normalizes it to at most 1024x1024 and
//! re-encodes as JPEG before base64-encoding for the planning request.
//! Plain I/O wrapper; no pipeline state.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use platelens_common::PlateError;
use std::path::Path;
use tracing::debug;

const MAX_DIMENSION: u32 = 1024;
const JPEG_QUALITY: u8 = 85;

/// Load an image file and convert it to base64-encoded JPEG bytes.
pub fn load_image_as_base64(path: &Path) -> Result<String, PlateError> {
    let raw = std::fs::read(path)?;

    let img = image::load_from_memory(&raw)
        .map_err(|e| PlateError::Image(format!("failed to decode {}: {}", path.display(), e)))?;

    let needs_resize = img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION;
    let img = if needs_resize {
        debug!(
            "resizing image from {}x{} to fit {}x{}",
            img.width(),
            img.height(),
            MAX_DIMENSION,
            MAX_DIMENSION
        );
        img.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
    } else {
        img
    };

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| PlateError::Image(format!("failed to encode JPEG: {}", e)))?;

    Ok(STANDARD.encode(&jpeg))
}
