//! Bucketing matched features into compatibility tiers.

use baseliner_core::{BaselineStatus, MatchResult};

/// The three tiered buckets an analysis partitions its matches into.
///
/// Order within each bucket equals detection order; every match lands in
/// exactly one bucket.
#[derive(Debug, Default)]
pub struct Buckets<'a> {
    pub compatible: Vec<MatchResult<'a>>,
    pub warnings: Vec<MatchResult<'a>>,
    pub incompatible: Vec<MatchResult<'a>>,
}

impl<'a> Buckets<'a> {
    pub fn total(&self) -> usize {
        self.compatible.len() + self.warnings.len() + self.incompatible.len()
    }

    /// Iterate every match in bucket order
    pub fn all(&self) -> impl Iterator<Item = &MatchResult<'a>> {
        self.compatible
            .iter()
            .chain(self.warnings.iter())
            .chain(self.incompatible.iter())
    }
}

/// Route matches into buckets by Baseline status.
///
/// Routing is fixed: widely available → compatible; newly available or
/// limited → warnings; not available → incompatible.
pub fn classify(matches: Vec<MatchResult<'_>>) -> Buckets<'_> {
    let mut buckets = Buckets::default();

    for result in matches {
        match result.feature.status {
            BaselineStatus::WidelyAvailable => buckets.compatible.push(result),
            BaselineStatus::NewlyAvailable | BaselineStatus::Limited => {
                buckets.warnings.push(result)
            }
            BaselineStatus::NotAvailable => buckets.incompatible.push(result),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseliner_core::{BaselineFeature, BrowserSupport};

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

    fn result<'a>(feature: &'a BaselineFeature, text: &str) -> MatchResult<'a> {
        MatchResult {
            feature,
            css_property: text.to_string(),
            context: None,
        }
    }

    #[test]
    fn test_routing_table() {
        let widely = feature("w", BaselineStatus::WidelyAvailable);
        let newly = feature("n", BaselineStatus::NewlyAvailable);
        let limited = feature("l", BaselineStatus::Limited);
        let unavailable = feature("x", BaselineStatus::NotAvailable);

        let buckets = classify(vec![
            result(&widely, "w: 1"),
            result(&newly, "n: 1"),
            result(&limited, "l: 1"),
            result(&unavailable, "x: 1"),
        ]);

        assert_eq!(buckets.compatible.len(), 1);
        assert_eq!(buckets.warnings.len(), 2);
        assert_eq!(buckets.incompatible.len(), 1);
        assert_eq!(buckets.total(), 4);
    }

    #[test]
    fn test_detection_order_preserved_within_buckets() {
        let first = feature("first", BaselineStatus::NewlyAvailable);
        let second = feature("second", BaselineStatus::Limited);

        let buckets = classify(vec![result(&first, "a"), result(&second, "b")]);
        let ids: Vec<&str> = buckets.warnings.iter().map(|m| m.feature.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_input_yields_empty_buckets() {
        let buckets = classify(Vec::new());
        assert_eq!(buckets.total(), 0);
        assert!(buckets.all().next().is_none());
    }
}
