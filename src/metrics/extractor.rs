//! Metric extraction from a decoded pixel grid
//!
//! A single stable row-major scan feeds all four metrics:
//! - dominant colors: exact pixel values counted over the full image
//! - brightness: mean intensity of the color channels
//! - saturation: mean HSV S of the dominant colors
//! - contrast: standard deviation of the raw sample buffer

use crate::constants::extraction::{
    CONTRAST_MAX, CONTRAST_SCALE, DOMINANT_COLOR_COUNT, GRAY_PLACEHOLDER, SATURATION_SCALE,
};
use crate::image_loader::RawImage;
use crate::metrics::{ColorSample, ImageMetrics};
use palette::{FromColor, Hsv, Srgb};
use std::collections::HashMap;
use tracing::debug;

/// Reduce a decoded image to its visual metrics
///
/// Pure and infallible: the grid is already validated by decoding, and
/// degenerate inputs (1x1, zero pixels) produce well-defined zero metrics.
pub fn extract_metrics(image: &RawImage) -> ImageMetrics {
    let dominant_colors = dominant_colors(image);
    let brightness = mean_brightness(image);
    let saturation = mean_dominant_saturation(&dominant_colors);
    let contrast = sample_contrast(&image.data);

    debug!(brightness, contrast, saturation, "extracted image metrics");

    ImageMetrics {
        brightness,
        contrast,
        saturation,
        dominant_colors,
        image_size: (image.width, image.height),
    }
}

/// Top 3 exact pixel colors by frequency
///
/// Ties keep the first-encountered order of the scan. Grayscale images have
/// no meaningful dominant-color concept in this model and report three
/// gray placeholders instead of failing.
fn dominant_colors(image: &RawImage) -> Vec<(ColorSample, usize)> {
    if !image.is_color() {
        return vec![(ColorSample::gray(GRAY_PLACEHOLDER), 0); DOMINANT_COLOR_COUNT];
    }

    let stride = image.channels as usize;
    let mut counts: HashMap<ColorSample, (usize, usize)> = HashMap::new();
    for (order, pixel) in image.data.chunks_exact(stride).enumerate() {
        let key = if stride == 4 {
            ColorSample::rgba(pixel[0], pixel[1], pixel[2], pixel[3])
        } else {
            ColorSample::rgb(pixel[0], pixel[1], pixel[2])
        };
        let entry = counts.entry(key).or_insert((0, order));
        entry.0 += 1;
    }

    let mut ranked: Vec<(ColorSample, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, seen_a)), (_, (count_b, seen_b))| {
        count_b.cmp(count_a).then(seen_a.cmp(seen_b))
    });
    ranked
        .into_iter()
        .take(DOMINANT_COLOR_COUNT)
        .map(|(color, (count, _))| (color, count))
        .collect()
}

/// Mean intensity over the color channels (alpha excluded), or over the
/// single channel for grayscale
fn mean_brightness(image: &RawImage) -> f64 {
    if image.pixel_count() == 0 {
        return 0.0;
    }
    if image.is_color() {
        let stride = image.channels as usize;
        let mut sum = 0u64;
        for pixel in image.data.chunks_exact(stride) {
            sum += pixel[0] as u64 + pixel[1] as u64 + pixel[2] as u64;
        }
        sum as f64 / (image.pixel_count() as f64 * 3.0)
    } else {
        let sum: u64 = image.data.iter().map(|&v| v as u64).sum();
        sum as f64 / image.data.len() as f64
    }
}

/// Mean HSV saturation (0-255 scale) of the dominant colors that carry an
/// RGB triplet; 0 when none do
fn mean_dominant_saturation(dominant: &[(ColorSample, usize)]) -> f64 {
    let saturations: Vec<f64> = dominant
        .iter()
        .filter_map(|(color, _)| color.rgb_triplet())
        .map(|(r, g, b)| {
            let srgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            Hsv::from_color(srgb).saturation as f64 * SATURATION_SCALE
        })
        .collect();

    if saturations.is_empty() {
        0.0
    } else {
        saturations.iter().sum::<f64>() / saturations.len() as f64
    }
}

/// Population standard deviation of the whole sample buffer, scaled by 10
/// and capped at 100
fn sample_contrast(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let n = data.len() as f64;
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = data
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (variance.sqrt() * CONTRAST_SCALE).min(CONTRAST_MAX)
}
