//! The engine's output artifact: match results and analysis reports.

use crate::feature::BaselineFeature;
use crate::status::Browser;
use serde::Serialize;

/// One matched feature usage.
///
/// Borrows its [`BaselineFeature`] from the index the analysis ran against;
/// the record itself is never copied or mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    /// The canonical feature this usage resolved to
    pub feature: &'a BaselineFeature,
    /// The usage text that matched, e.g. `display: flex`
    pub css_property: String,
    /// Positional context, e.g. `Line 12`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Per-browser support scores, 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrowserScores {
    pub chrome: u8,
    pub firefox: u8,
    pub safari: u8,
    pub edge: u8,
}

impl BrowserScores {
    /// Score recorded for one browser
    pub fn get(&self, browser: Browser) -> u8 {
        match browser {
            Browser::Chrome => self.chrome,
            Browser::Firefox => self.firefox,
            Browser::Safari => self.safari,
            Browser::Edge => self.edge,
        }
    }
}

impl Default for BrowserScores {
    /// No matched features means nothing can be unsupported.
    fn default() -> Self {
        Self {
            chrome: 100,
            firefox: 100,
            safari: 100,
            edge: 100,
        }
    }
}

/// The complete result of analyzing one block of stylesheet text.
///
/// Immutable once produced. Bucket order equals detection order, and the
/// three buckets partition the matched features exactly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport<'a> {
    /// Features that are widely available
    pub compatible: Vec<MatchResult<'a>>,
    /// Features that are newly available or of limited availability
    pub warnings: Vec<MatchResult<'a>>,
    /// Features explicitly outside Baseline
    pub incompatible: Vec<MatchResult<'a>>,
    /// Overall compatibility score, 0–100
    pub score: u8,
    /// Per-browser support scores
    pub browser_scores: BrowserScores,
}

impl<'a> AnalysisReport<'a> {
    /// Total number of matched features across all buckets
    pub fn total_matched(&self) -> usize {
        self.compatible.len() + self.warnings.len() + self.incompatible.len()
    }

    /// Iterate every match in bucket order (compatible, warnings, incompatible)
    pub fn all_matches(&self) -> impl Iterator<Item = &MatchResult<'a>> {
        self.compatible
            .iter()
            .chain(self.warnings.iter())
            .chain(self.incompatible.iter())
    }

    /// Whether the analysis found no known features at all
    pub fn is_empty(&self) -> bool {
        self.total_matched() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::BrowserSupport;
    use crate::status::BaselineStatus;

    fn feature(id: &str, status: BaselineStatus) -> BaselineFeature {
        BaselineFeature {
            id: id.to_string(),
            name: id.to_string(),
            css_property: id.to_string(),
            status,
            available_since: None,
            description: format!("{id} feature"),
            fallback: None,
            browser_support: BrowserSupport::default(),
            group: None,
            spec: None,
        }
    }

    #[test]
    fn test_report_counts_and_iteration() {
        let flexbox = feature("flexbox", BaselineStatus::WidelyAvailable);
        let anchor = feature("anchor-positioning", BaselineStatus::NotAvailable);

        let report = AnalysisReport {
            compatible: vec![MatchResult {
                feature: &flexbox,
                css_property: "display: flex".to_string(),
                context: Some("Line 2".to_string()),
            }],
            warnings: vec![],
            incompatible: vec![MatchResult {
                feature: &anchor,
                css_property: "anchor-name: --a".to_string(),
                context: None,
            }],
            score: 50,
            browser_scores: BrowserScores::default(),
        };

        assert_eq!(report.total_matched(), 2);
        assert!(!report.is_empty());
        let ids: Vec<&str> = report.all_matches().map(|m| m.feature.id.as_str()).collect();
        assert_eq!(ids, vec!["flexbox", "anchor-positioning"]);
    }

    #[test]
    fn test_report_wire_shape() {
        let gap = feature("gap", BaselineStatus::WidelyAvailable);
        let report = AnalysisReport {
            compatible: vec![MatchResult {
                feature: &gap,
                css_property: "gap: 1rem".to_string(),
                context: Some("Line 1".to_string()),
            }],
            warnings: vec![],
            incompatible: vec![],
            score: 100,
            browser_scores: BrowserScores::default(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["compatible"][0]["cssProperty"], "gap: 1rem");
        assert_eq!(json["compatible"][0]["feature"]["status"], "widely-available");
        assert_eq!(json["score"], 100);
        assert_eq!(json["browserScores"]["safari"], 100);
    }

    #[test]
    fn test_default_browser_scores_are_vacuously_full() {
        let scores = BrowserScores::default();
        for browser in Browser::all() {
            assert_eq!(scores.get(*browser), 100);
        }
    }
}
