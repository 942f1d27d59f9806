//! Fixed 5S rule set
//!
//! Each category applies a deterministic threshold ladder to one metric.
//! Scores truncate toward zero. Seiton and Seiso apply a floor after their
//! recommendation branch fires, and the adjusted value is what feeds the
//! overall average.

use crate::constants::{thresholds, weights};
use crate::metrics::ImageMetrics;
use crate::scoring::{AnalysisResult, CategoryResult};

pub const REC_SEIRI_LOW_CONTRAST: &str =
    "Low contrast detected. Organize the elements for clearer visibility.";
pub const REC_SEIRI_GOOD_CONTRAST: &str = "Good contrast. Elements are well differentiated.";
pub const REC_SEIRI_GROUP_SIMILAR: &str =
    "Consider grouping similar objects for better sorting.";

pub const REC_SEITON_LOW_LIGHT: &str =
    "Low lighting. Improve the light to see the order of the space.";
pub const REC_SEITON_OPTIMAL_LIGHT: &str =
    "Optimal lighting. The arrangement is clearly visible.";
pub const REC_SEITON_MODERATE_LIGHT: &str =
    "Moderate lighting. Consider improving it to better view the layout.";

pub const REC_SEISO_BUSY_PALETTE: &str =
    "Multiple colors detected. Clean up and standardize the color palette.";
pub const REC_SEISO_CONSISTENT_PALETTE: &str =
    "Consistent color palette. The space looks visually clean.";
pub const REC_SEISO_DEEP_CLEAN: &str =
    "Perform a deep clean: remove dust and visible clutter.";

pub const REC_SEIKETSU_SET_STANDARDS: &str =
    "Establish consistent organization standards.";
pub const REC_SEIKETSU_LABEL_ZONES: &str =
    "Use labels and designated zones for each kind of element.";

pub const REC_SHITSUKE_DAILY_ROUTINE: &str = "Create daily routines to review the space.";
pub const REC_SHITSUKE_MONTHLY_AUDIT: &str = "Run monthly 5S audits.";
pub const REC_SHITSUKE_TEAM_BUYIN: &str = "Involve the team in maintaining the standards.";

/// Score all five categories and the overall aggregate
///
/// Pure function of the metrics; never fails. The overall score is the
/// truncated mean of the five category scores after any floor adjustment.
pub fn score_metrics(metrics: &ImageMetrics) -> AnalysisResult {
    let seiri = score_seiri(metrics.contrast);
    let seiton = score_seiton(metrics.brightness);
    let seiso = score_seiso(metrics.saturation);
    let seiketsu = score_seiketsu(metrics.contrast);
    let shitsuke = score_shitsuke();

    let total = seiri.score as i32
        + seiton.score as i32
        + seiso.score as i32
        + seiketsu.score as i32
        + shitsuke.score as i32;
    let overall_score = (total / 5) as u8;

    AnalysisResult {
        seiri,
        seiton,
        seiso,
        seiketsu,
        shitsuke,
        overall_score,
    }
}

/// Seiri (Sort): contrast as a proxy for how distinguishable elements are
fn score_seiri(contrast: f64) -> CategoryResult {
    let score = ((contrast * weights::SEIRI_CONTRAST_WEIGHT) as i32).min(100);

    let mut recommendations = Vec::new();
    if contrast < thresholds::SEIRI_CONTRAST_LOW {
        recommendations.push(REC_SEIRI_LOW_CONTRAST.to_string());
    }
    // The else pairs with the high-contrast check, not the low-contrast one:
    // mid-range contrast gets the grouping advice and nothing else.
    if contrast > thresholds::SEIRI_CONTRAST_HIGH {
        recommendations.push(REC_SEIRI_GOOD_CONTRAST.to_string());
    } else {
        recommendations.push(REC_SEIRI_GROUP_SIMILAR.to_string());
    }

    CategoryResult {
        score: score as u8,
        recommendations,
    }
}

/// Seiton (Set in order): brightness as a proxy for visible arrangement
fn score_seiton(brightness: f64) -> CategoryResult {
    let mut score = ((brightness / 255.0 * 100.0) as i32).min(100);

    let mut recommendations = Vec::new();
    if brightness < thresholds::SEITON_BRIGHTNESS_LOW {
        recommendations.push(REC_SEITON_LOW_LIGHT.to_string());
        score = (score - weights::SEITON_LOW_LIGHT_PENALTY).max(weights::SEITON_LOW_LIGHT_FLOOR);
    } else if brightness > thresholds::SEITON_BRIGHTNESS_HIGH {
        recommendations.push(REC_SEITON_OPTIMAL_LIGHT.to_string());
    } else {
        recommendations.push(REC_SEITON_MODERATE_LIGHT.to_string());
    }

    CategoryResult {
        score: score as u8,
        recommendations,
    }
}

/// Seiso (Shine): palette saturation as a proxy for visual clutter
fn score_seiso(saturation: f64) -> CategoryResult {
    let mut score = (100.0 - saturation / 255.0 * weights::SEISO_SATURATION_WEIGHT) as i32;

    let mut recommendations = Vec::new();
    if saturation > thresholds::SEISO_SATURATION_HIGH {
        recommendations.push(REC_SEISO_BUSY_PALETTE.to_string());
        score = (score - weights::SEISO_BUSY_PENALTY).max(weights::SEISO_BUSY_FLOOR);
    } else {
        recommendations.push(REC_SEISO_CONSISTENT_PALETTE.to_string());
    }
    recommendations.push(REC_SEISO_DEEP_CLEAN.to_string());

    CategoryResult {
        score: score as u8,
        recommendations,
    }
}

/// Seiketsu (Standardize): contrast-driven uniformity baseline
fn score_seiketsu(contrast: f64) -> CategoryResult {
    let score =
        weights::SEIKETSU_BASE + (contrast / 100.0 * weights::SEIKETSU_CONTRAST_WEIGHT) as i32;

    CategoryResult {
        score: score as u8,
        recommendations: vec![
            REC_SEIKETSU_SET_STANDARDS.to_string(),
            REC_SEIKETSU_LABEL_ZONES.to_string(),
        ],
    }
}

/// Shitsuke (Sustain): no metric drives this, constant baseline advice
fn score_shitsuke() -> CategoryResult {
    CategoryResult {
        score: weights::SHITSUKE_SCORE as u8,
        recommendations: vec![
            REC_SHITSUKE_DAILY_ROUTINE.to_string(),
            REC_SHITSUKE_MONTHLY_AUDIT.to_string(),
            REC_SHITSUKE_TEAM_BUYIN.to_string(),
        ],
    }
}
