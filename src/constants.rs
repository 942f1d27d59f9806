//! Fixed thresholds and weights for metric extraction and the 5S rules
//!
//! All rules are deliberately constant: the assessment is a deterministic
//! heuristic, not a tunable model.

/// Metric extraction parameters
pub mod extraction {
    /// Multiplier applied to the raw sample standard deviation
    pub const CONTRAST_SCALE: f64 = 10.0;

    /// Upper cap for the contrast metric
    pub const CONTRAST_MAX: f64 = 100.0;

    /// Number of dominant colors retained
    pub const DOMINANT_COLOR_COUNT: usize = 3;

    /// Placeholder gray value reported for images without color channels
    pub const GRAY_PLACEHOLDER: u8 = 128;

    /// HSV saturation is reported on the 0-255 scale
    pub const SATURATION_SCALE: f64 = 255.0;
}

/// Metric thresholds that trigger recommendation branches
pub mod thresholds {
    /// Contrast below this is flagged as poor differentiation (Seiri)
    pub const SEIRI_CONTRAST_LOW: f64 = 30.0;

    /// Contrast above this counts as well differentiated (Seiri)
    pub const SEIRI_CONTRAST_HIGH: f64 = 70.0;

    /// Brightness below this is flagged as low light (Seiton)
    pub const SEITON_BRIGHTNESS_LOW: f64 = 80.0;

    /// Brightness above this counts as optimal lighting (Seiton)
    pub const SEITON_BRIGHTNESS_HIGH: f64 = 220.0;

    /// Saturation above this is flagged as a busy palette (Seiso)
    pub const SEISO_SATURATION_HIGH: f64 = 150.0;
}

/// Score formula weights, floors and penalties
pub mod weights {
    /// Seiri score is contrast times this weight, capped at 100
    pub const SEIRI_CONTRAST_WEIGHT: f64 = 1.5;

    /// Floor applied to the Seiton score when the low-light rule fires
    pub const SEITON_LOW_LIGHT_FLOOR: i32 = 30;

    /// Penalty subtracted from the Seiton score when the low-light rule fires
    pub const SEITON_LOW_LIGHT_PENALTY: i32 = 20;

    /// Weight of the saturation term subtracted in the Seiso score
    pub const SEISO_SATURATION_WEIGHT: f64 = 30.0;

    /// Floor applied to the Seiso score when the busy-palette rule fires
    pub const SEISO_BUSY_FLOOR: i32 = 40;

    /// Penalty subtracted from the Seiso score when the busy-palette rule fires
    pub const SEISO_BUSY_PENALTY: i32 = 15;

    /// Base Seiketsu score before the contrast term is added
    pub const SEIKETSU_BASE: i32 = 60;

    /// Weight of the contrast term in the Seiketsu score
    pub const SEIKETSU_CONTRAST_WEIGHT: f64 = 30.0;

    /// Shitsuke has no driving metric; constant baseline
    pub const SHITSUKE_SCORE: i32 = 70;
}
