//! Feature index construction and lookup.
//!
//! Normalizes raw `web-features` records into canonical [`BaselineFeature`]
//! entries. Built once at startup, immutable afterwards; analyses borrow
//! from it concurrently without locking.

use crate::dataset::{self, RawBaseline, RawDataset, RawFeature, RawSupport};
use crate::{EngineError, Result};
use baseliner_core::{BaselineFeature, BaselineStatus, BrowserSupport};
use std::collections::BTreeMap;

/// Namespace prefixes stripped when deriving a feature's stylesheet property
/// from its first compat-feature identifier.
const COMPAT_PREFIXES: [&str; 3] = ["css.properties.", "css.selectors.", "css.types."];

/// An immutable, id-keyed index of canonical features.
///
/// Iteration order is sorted by id, which keeps containment matching
/// reproducible across dataset revisions and load orders.
#[derive(Debug, Clone, Default)]
pub struct FeatureIndex {
    features: BTreeMap<String, BaselineFeature>,
}

/// The outcome of an index build: the index plus skip diagnostics.
///
/// Skipped records are a diagnostic, never a failure; the build always
/// succeeds with whatever records were usable.
#[derive(Debug)]
pub struct IndexBuild {
    pub index: FeatureIndex,
    /// Number of raw records rejected for missing name/status structure
    pub skipped: usize,
}

impl FeatureIndex {
    /// Build an index from a raw dataset, skipping malformed records.
    ///
    /// A record is usable when it deserializes, carries a non-empty `name`,
    /// and carries a `status` object. Everything else is normalized with
    /// conservative defaults.
    pub fn build(dataset: RawDataset) -> IndexBuild {
        let mut features = BTreeMap::new();
        let mut skipped = 0usize;

        for (id, value) in dataset {
            match serde_json::from_value::<RawFeature>(value) {
                Ok(raw) => match normalize(&id, raw) {
                    Some(feature) => {
                        features.insert(id, feature);
                    }
                    None => {
                        tracing::warn!(feature = %id, "skipping feature: missing name or status");
                        skipped += 1;
                    }
                },
                Err(err) => {
                    tracing::warn!(feature = %id, error = %err, "skipping feature: invalid structure");
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            loaded = features.len(),
            skipped,
            "feature index built"
        );

        IndexBuild {
            index: FeatureIndex { features },
            skipped,
        }
    }

    /// Parse JSON text and build an index in one step.
    ///
    /// Errors if the JSON is malformed or yields zero usable records; a
    /// partially-usable dataset still succeeds.
    pub fn from_json_str(json: &str) -> Result<IndexBuild> {
        let dataset = dataset::parse_dataset(json)?;
        let build = Self::build(dataset);
        if build.index.is_empty() {
            return Err(EngineError::EmptyDataset);
        }
        Ok(build)
    }

    /// Look up a feature by id
    pub fn get(&self, id: &str) -> Option<&BaselineFeature> {
        self.features.get(id)
    }

    /// Iterate features in sorted id order
    pub fn features(&self) -> impl Iterator<Item = &BaselineFeature> {
        self.features.values()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Normalize one raw record, or `None` when required fields are absent.
fn normalize(id: &str, raw: RawFeature) -> Option<BaselineFeature> {
    let name = raw.name.filter(|n| !n.is_empty())?;
    let status_block = raw.status?;

    let status = normalize_status(status_block.baseline.as_ref());
    let available_since = status_block
        .baseline_low_date
        .or(status_block.baseline_high_date);
    let support = status_block.support.unwrap_or_default();

    let description = raw
        .description
        .unwrap_or_else(|| format!("{name} feature"));

    Some(BaselineFeature {
        id: id.to_string(),
        name,
        css_property: derive_css_property(id, raw.compat_features.as_deref()),
        status,
        available_since,
        description,
        fallback: None,
        browser_support: to_browser_support(support),
        group: raw.group,
        spec: raw.spec,
    })
}

/// Upstream `baseline` → Baseline tier.
///
/// Anything unrecognized (including `true`, which upstream never emits)
/// falls back to `Limited` rather than being widened.
fn normalize_status(baseline: Option<&RawBaseline>) -> BaselineStatus {
    match baseline {
        Some(RawBaseline::Flag(false)) => BaselineStatus::NotAvailable,
        Some(RawBaseline::Level(level)) if level == "low" => BaselineStatus::NewlyAvailable,
        Some(RawBaseline::Level(level)) if level == "high" => BaselineStatus::WidelyAvailable,
        _ => BaselineStatus::Limited,
    }
}

/// First compat-feature id with its CSS namespace prefix stripped, or the
/// feature's own id when the record lists none.
fn derive_css_property(id: &str, compat_features: Option<&[String]>) -> String {
    let Some(first) = compat_features.and_then(|list| list.first()) else {
        return id.to_string();
    };

    let mut property = first.as_str();
    for prefix in COMPAT_PREFIXES {
        property = property.strip_prefix(prefix).unwrap_or(property);
    }
    property.to_string()
}

fn to_browser_support(support: RawSupport) -> BrowserSupport {
    BrowserSupport {
        chrome: support.chrome,
        firefox: support.firefox,
        safari: support.safari,
        edge: support.edge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build_from(json: serde_json::Value) -> IndexBuild {
        let dataset: RawDataset = serde_json::from_value(json).unwrap();
        FeatureIndex::build(dataset)
    }

    #[test]
    fn test_build_normalizes_complete_record() {
        let build = build_from(json!({
            "container-queries": {
                "name": "Container queries",
                "description": "Size queries against a container",
                "spec": "https://drafts.csswg.org/css-contain-3/",
                "group": "layout",
                "compat_features": ["css.at-rules.container"],
                "status": {
                    "baseline": "low",
                    "baseline_low_date": "2023-02-14",
                    "support": { "chrome": "105", "firefox": "110", "safari": "16", "edge": "105" }
                }
            }
        }));

        assert_eq!(build.skipped, 0);
        let feature = build.index.get("container-queries").unwrap();
        assert_eq!(feature.status, BaselineStatus::NewlyAvailable);
        assert_eq!(feature.available_since.as_deref(), Some("2023-02-14"));
        // "css.at-rules." is not a stripped namespace
        assert_eq!(feature.css_property, "css.at-rules.container");
        assert_eq!(feature.browser_support.firefox.as_deref(), Some("110"));
    }

    #[test]
    fn test_status_normalization_table() {
        let build = build_from(json!({
            "a": { "name": "a", "status": { "baseline": false } },
            "b": { "name": "b", "status": { "baseline": "low" } },
            "c": { "name": "c", "status": { "baseline": "high" } },
            "d": { "name": "d", "status": {} },
            "e": { "name": "e", "status": { "baseline": true } }
        }));

        let status = |id: &str| build.index.get(id).unwrap().status;
        assert_eq!(status("a"), BaselineStatus::NotAvailable);
        assert_eq!(status("b"), BaselineStatus::NewlyAvailable);
        assert_eq!(status("c"), BaselineStatus::WidelyAvailable);
        assert_eq!(status("d"), BaselineStatus::Limited);
        // `true` is unknown upstream: normalized conservatively, never widened
        assert_eq!(status("e"), BaselineStatus::Limited);
    }

    #[test]
    fn test_css_property_derivation() {
        let build = build_from(json!({
            "flexbox": {
                "name": "Flexbox",
                "compat_features": ["css.properties.flex", "css.properties.flex-basis"],
                "status": { "baseline": "high" }
            },
            "has": {
                "name": ":has()",
                "compat_features": ["css.selectors.has"],
                "status": { "baseline": "low" }
            },
            "color-mix": {
                "name": "color-mix()",
                "compat_features": ["css.types.color.color-mix"],
                "status": { "baseline": "low" }
            },
            "nesting": {
                "name": "Nesting",
                "status": { "baseline": "low" }
            }
        }));

        let prop = |id: &str| build.index.get(id).unwrap().css_property.clone();
        assert_eq!(prop("flexbox"), "flex");
        assert_eq!(prop("has"), "has");
        assert_eq!(prop("color-mix"), "color.color-mix");
        // No compat_features: the feature id stands in verbatim
        assert_eq!(prop("nesting"), "nesting");
    }

    #[test]
    fn test_malformed_records_are_skipped_not_fatal() {
        let build = build_from(json!({
            "good": { "name": "Good", "status": { "baseline": "high" } },
            "no-name": { "status": { "baseline": "high" } },
            "empty-name": { "name": "", "status": { "baseline": "high" } },
            "no-status": { "name": "No status" },
            "wrong-shape": { "name": 42, "status": "high" }
        }));

        assert_eq!(build.skipped, 4);
        assert_eq!(build.index.len(), 1);
        assert!(build.index.get("good").is_some());
    }

    #[test]
    fn test_missing_support_entries_stay_empty() {
        let build = build_from(json!({
            "partial": {
                "name": "Partial",
                "status": { "baseline": false, "support": { "chrome": "125" } }
            }
        }));

        let support = &build.index.get("partial").unwrap().browser_support;
        assert_eq!(support.chrome.as_deref(), Some("125"));
        assert!(support.firefox.is_none());
        assert!(support.safari.is_none());
        assert!(support.edge.is_none());
    }

    #[test]
    fn test_from_json_str_rejects_unusable_dataset() {
        let err = FeatureIndex::from_json_str(r#"{ "only": { "status": {} } }"#).unwrap_err();
        assert!(matches!(err, EngineError::EmptyDataset));
    }

    #[test]
    fn test_description_defaults_from_name() {
        let build = build_from(json!({
            "gap": { "name": "gap", "status": { "baseline": "high" } }
        }));
        assert_eq!(build.index.get("gap").unwrap().description, "gap feature");
    }
}
