//! Image decoding into a raw pixel grid
//!
//! Decodes in-memory image bytes into a row-major buffer of 8-bit samples
//! with a normalized channel layout. Any format the `image` crate decodes
//! by default is accepted (PNG, JPEG, GIF, BMP, WebP, TIFF, ...).
//!
//! ## Channel normalization
//!
//! - grayscale sources decode to 1 channel
//! - sources with an alpha channel decode to 4 (RGBA)
//! - everything else decodes to 3 (RGB)
//!
//! 16-bit sample depths are narrowed to 8 bits.

use crate::error::{AnalysisError, Result};
use image::ColorType;
use tracing::debug;

/// Decoded pixel grid with a known channel layout
///
/// `data` holds row-major interleaved samples, `channels` samples per pixel.
/// Created by [`decode_image`], consumed by metric extraction, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Samples per pixel: 1 grayscale, 3 RGB, 4 RGBA
    pub channels: u8,
    /// Row-major interleaved 8-bit samples
    pub data: Vec<u8>,
}

impl RawImage {
    /// Number of pixels in the grid
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the image carries color channels
    pub fn is_color(&self) -> bool {
        self.channels >= 3
    }
}

/// Decode raw image bytes into a [`RawImage`]
///
/// # Errors
///
/// Returns [`AnalysisError::DecodeError`] if the bytes are not a valid,
/// supported image encoding.
pub fn decode_image(bytes: &[u8]) -> Result<RawImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| AnalysisError::decode("unsupported or malformed image data", e))?;

    let raw = match img.color() {
        ColorType::L8 | ColorType::L16 => {
            let gray = img.to_luma8();
            let (width, height) = gray.dimensions();
            RawImage {
                width,
                height,
                channels: 1,
                data: gray.into_raw(),
            }
        }
        ct if ct.has_alpha() => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            RawImage {
                width,
                height,
                channels: 4,
                data: rgba.into_raw(),
            }
        }
        _ => {
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();
            RawImage {
                width,
                height,
                channels: 3,
                data: rgb.into_raw(),
            }
        }
    };

    debug!(
        width = raw.width,
        height = raw.height,
        channels = raw.channels,
        "decoded image"
    );
    Ok(raw)
}
