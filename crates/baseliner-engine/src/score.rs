//! Compatibility scoring.
//!
//! Two reductions over the classified buckets: a weighted overall score and
//! a per-browser support percentage. Both define the empty analysis as a
//! vacuous pass (100): a stylesheet using no known features cannot be
//! incompatible with anything.

use crate::classify::Buckets;
use baseliner_core::{Browser, BrowserScores};

/// Weight of a widely-available match
const COMPATIBLE_WEIGHT: f64 = 1.0;
/// Weight of a newly-available or limited match. The two warning tiers are
/// deliberately not distinguished.
const WARNING_WEIGHT: f64 = 0.5;
/// Weight of a not-available match
const INCOMPATIBLE_WEIGHT: f64 = 0.0;

/// Overall compatibility score in `[0, 100]`.
pub fn overall_score(buckets: &Buckets<'_>) -> u8 {
    let total = buckets.total();
    if total == 0 {
        return 100;
    }

    let weighted = buckets.compatible.len() as f64 * COMPATIBLE_WEIGHT
        + buckets.warnings.len() as f64 * WARNING_WEIGHT
        + buckets.incompatible.len() as f64 * INCOMPATIBLE_WEIGHT;

    ((weighted / total as f64) * 100.0).round() as u8
}

/// Per-browser support percentages across all matched features.
///
/// A feature counts as supported for a browser when its support map records
/// a non-empty version for it. No matches → 100 for every browser.
pub fn browser_scores(buckets: &Buckets<'_>) -> BrowserScores {
    let total = buckets.total();
    if total == 0 {
        return BrowserScores::default();
    }

    let score_for = |browser: Browser| -> u8 {
        let supported = buckets
            .all()
            .filter(|m| m.feature.browser_support.supports(browser))
            .count();
        ((supported as f64 / total as f64) * 100.0).round() as u8
    };

    BrowserScores {
        chrome: score_for(Browser::Chrome),
        firefox: score_for(Browser::Firefox),
        safari: score_for(Browser::Safari),
        edge: score_for(Browser::Edge),
    }
}
