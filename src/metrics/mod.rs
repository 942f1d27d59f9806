//! Visual metric extraction module
//!
//! Reduces a decoded pixel grid to the four metrics the scoring rules
//! consume: brightness, contrast, color saturation and dominant colors.

pub mod extractor;

pub use extractor::extract_metrics;

use serde::{Serialize, Serializer};

/// One pixel's exact channel values
///
/// Used as the grouping key for dominant-color counting. Carries up to
/// 4 channels (R, G, B, A) or a single gray value; for RGBA pixels the
/// alpha byte is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSample {
    channels: [u8; 4],
    len: u8,
}

impl ColorSample {
    /// Single-channel gray sample
    pub fn gray(value: u8) -> Self {
        Self {
            channels: [value, 0, 0, 0],
            len: 1,
        }
    }

    /// Three-channel RGB sample
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            channels: [r, g, b, 0],
            len: 3,
        }
    }

    /// Four-channel RGBA sample
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            channels: [r, g, b, a],
            len: 4,
        }
    }

    /// Channel values as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.channels[..self.len as usize]
    }

    /// RGB triplet, if the sample carries color channels
    ///
    /// Alpha, when present, is not part of the triplet.
    pub fn rgb_triplet(&self) -> Option<(u8, u8, u8)> {
        if self.len >= 3 {
            Some((self.channels[0], self.channels[1], self.channels[2]))
        } else {
            None
        }
    }
}

// Serializes as a tuple of its channel values, e.g. [128, 64, 32].
impl Serialize for ColorSample {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.as_slice())
    }
}

/// Metrics derived from one image, input to the scoring engine
///
/// All numeric fields are finite: `brightness` and `saturation` lie in
/// [0, 255] and `contrast` in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageMetrics {
    /// Mean channel intensity across all pixels (0-255)
    pub brightness: f64,
    /// Standard deviation of all raw samples, scaled by 10 and capped at 100
    pub contrast: f64,
    /// Mean HSV saturation of the dominant colors (0-255); 0 for grayscale
    pub saturation: f64,
    /// Up to 3 most frequent exact pixel colors with their occurrence
    /// counts, most frequent first. Grayscale images report three gray(128)
    /// placeholders with count 0.
    pub dominant_colors: Vec<(ColorSample, usize)>,
    /// Decoded image dimensions as (width, height)
    pub image_size: (u32, u32),
}
