//! 5S scoring engine module
//!
//! Maps the extracted image metrics through a fixed rule set into five
//! scored categories (Seiri, Seiton, Seiso, Seiketsu, Shitsuke) with
//! textual recommendations and one aggregate score.

pub mod rules;

pub use rules::score_metrics;

use serde::Serialize;

/// Score and recommendations for one 5S category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    /// Category score, 0-100
    pub score: u8,
    /// Recommendation texts in rule-evaluation order; never empty
    pub recommendations: Vec<String>,
}

/// Complete 5S assessment for one image
///
/// Created fresh per analysis and immutable once returned. Serializes to
/// the five category keys plus `overall_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Seiri (Sort): differentiation of elements, driven by contrast
    pub seiri: CategoryResult,
    /// Seiton (Set in order): visibility of arrangement, driven by brightness
    pub seiton: CategoryResult,
    /// Seiso (Shine): visual cleanliness, driven by palette saturation
    pub seiso: CategoryResult,
    /// Seiketsu (Standardize): uniformity, driven by contrast
    pub seiketsu: CategoryResult,
    /// Shitsuke (Sustain): discipline baseline, constant
    pub shitsuke: CategoryResult,
    /// Truncated mean of the five category scores, after floor adjustments
    pub overall_score: u8,
}
