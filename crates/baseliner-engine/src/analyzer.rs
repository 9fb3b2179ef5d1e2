//! The analysis pipeline facade.

use crate::matcher::FeatureMatcher;
use crate::scanner::StylesheetScanner;
use crate::{classify, score, FeatureIndex, Result};
use baseliner_core::{AnalysisReport, MatchResult};
use std::collections::HashSet;

/// Runs the full `scan → match → classify → score` pipeline against one
/// feature index.
///
/// Construct once at startup and share freely: the index is read-only after
/// construction and `analyze` takes `&self`, so any number of analyses may
/// run concurrently without coordination.
pub struct Analyzer {
    index: FeatureIndex,
    scanner: StylesheetScanner,
}

impl Analyzer {
    /// Build an analyzer around an index, compiling scanner patterns once.
    pub fn new(index: FeatureIndex) -> Result<Self> {
        Ok(Self {
            index,
            scanner: StylesheetScanner::new()?,
        })
    }

    /// The index this analyzer resolves against
    pub fn index(&self) -> &FeatureIndex {
        &self.index
    }

    /// Analyze one block of stylesheet text.
    ///
    /// Pure and total: any input produces a report, deterministically. If
    /// several tokens resolve to the same feature, only the first match is
    /// kept (stable in detection order).
    pub fn analyze(&self, css: &str) -> AnalysisReport<'_> {
        let tokens = self.scanner.scan(css);
        let matcher = FeatureMatcher::new(&self.index);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut matches: Vec<MatchResult<'_>> = Vec::new();

        for token in &tokens {
            if let Some(feature) = matcher.resolve(token) {
                if seen.insert(feature.id.as_str()) {
                    matches.push(MatchResult {
                        feature,
                        css_property: format!("{}: {}", token.property, token.value),
                        context: Some(format!("Line {}", token.line)),
                    });
                }
            }
        }

        let buckets = classify::classify(matches);
        let score = score::overall_score(&buckets);
        let browser_scores = score::browser_scores(&buckets);

        AnalysisReport {
            compatible: buckets.compatible,
            warnings: buckets.warnings,
            incompatible: buckets.incompatible,
            score,
            browser_scores,
        }
    }
}
