//! # Gemba Scan
//!
//! Heuristic 5S workplace-organization assessment from a single photograph.
//!
//! The library decodes an image, reduces it to four visual metrics
//! (brightness, contrast, color saturation, dominant colors) and maps them
//! through a fixed deterministic rule set into five scored 5S categories —
//! Seiri (Sort), Seiton (Set in order), Seiso (Shine), Seiketsu
//! (Standardize), Shitsuke (Sustain) — each with textual recommendations,
//! plus one overall score.
//!
//! The pipeline is stateless and pure: identical bytes in, identical
//! assessment out.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gemba_scan::analyze_image;
//!
//! let bytes = std::fs::read("workspace.jpg")?;
//! let result = analyze_image(&bytes)?;
//! println!("overall: {}", result.overall_score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constants;
pub mod error;
pub mod image_loader;
pub mod metrics;
pub mod scoring;

pub use error::{AnalysisError, Result};
pub use image_loader::{decode_image, RawImage};
pub use metrics::{extract_metrics, ColorSample, ImageMetrics};
pub use scoring::{score_metrics, AnalysisResult, CategoryResult};

/// Run the full pipeline on raw image bytes
///
/// Decodes the bytes, extracts the visual metrics and scores them. The
/// stages are also exposed individually as [`decode_image`],
/// [`extract_metrics`] and [`score_metrics`].
///
/// # Errors
///
/// Returns [`AnalysisError::DecodeError`] if the bytes are not a valid,
/// supported image encoding. Scoring itself cannot fail.
pub fn analyze_image(bytes: &[u8]) -> Result<AnalysisResult> {
    let image = decode_image(bytes)?;
    let metrics = extract_metrics(&image);
    Ok(score_metrics(&metrics))
}
