//! Raw `web-features` dataset parsing.
//!
//! The upstream dataset is a JSON mapping from feature id to a loosely-typed
//! record. Records are kept as [`serde_json::Value`] at this layer so that a
//! single malformed entry can be skipped during index construction instead
//! of failing the whole load.

use crate::Result;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A raw dataset: feature id → untyped record.
///
/// Sorted keys keep downstream matching deterministic regardless of the
/// order the JSON arrived in.
pub type RawDataset = BTreeMap<String, Value>;

/// The subset of an upstream `web-features` record the index consumes.
///
/// Everything is optional: presence is validated per record at build time.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFeature {
    pub name: Option<String>,
    pub description: Option<String>,
    pub spec: Option<String>,
    pub group: Option<String>,
    pub compat_features: Option<Vec<String>>,
    pub status: Option<RawStatus>,
}

/// Upstream Baseline status block.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStatus {
    pub baseline: Option<RawBaseline>,
    pub baseline_low_date: Option<String>,
    pub baseline_high_date: Option<String>,
    pub support: Option<RawSupport>,
}

/// Upstream `baseline` field: `false`, `"low"` or `"high"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawBaseline {
    Flag(bool),
    Level(String),
}

/// Upstream per-browser support versions. Desktop fields only; the mobile
/// variants the dataset also carries are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSupport {
    pub chrome: Option<String>,
    pub firefox: Option<String>,
    pub safari: Option<String>,
    pub edge: Option<String>,
}

/// Parse a dataset from JSON text.
///
/// Accepts either a bare `{ "<id>": {...}, ... }` mapping or the full
/// `web-features` `data.json` shape where the mapping lives under a
/// top-level `"features"` key.
pub fn parse_dataset(json: &str) -> Result<RawDataset> {
    let root: Value = serde_json::from_str(json)?;

    let features = match &root {
        Value::Object(map) if map.get("features").is_some_and(Value::is_object) => {
            map.get("features").cloned()
        }
        _ => None,
    }
    .unwrap_or(root);

    let dataset: RawDataset = serde_json::from_value(features)?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_mapping() {
        let json = r#"{ "gap": { "name": "gap", "status": { "baseline": "high" } } }"#;
        let dataset = parse_dataset(json).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.contains_key("gap"));
    }

    #[test]
    fn test_parse_data_json_shape() {
        let json = r#"{
            "browsers": { "chrome": { "name": "Chrome" } },
            "features": {
                "gap": { "name": "gap", "status": { "baseline": "high" } },
                "grid": { "name": "Grid", "status": { "baseline": "high" } }
            }
        }"#;
        let dataset = parse_dataset(json).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(parse_dataset("[1, 2, 3]").is_err());
        assert!(parse_dataset("not json").is_err());
    }

    #[test]
    fn test_raw_baseline_accepts_flag_and_level() {
        let flag: RawBaseline = serde_json::from_str("false").unwrap();
        assert!(matches!(flag, RawBaseline::Flag(false)));
        let level: RawBaseline = serde_json::from_str("\"low\"").unwrap();
        assert!(matches!(level, RawBaseline::Level(ref s) if s == "low"));
    }

    #[test]
    fn test_dataset_keys_are_sorted() {
        let json = r#"{ "zeta": {}, "alpha": {}, "mid": {} }"#;
        let dataset = parse_dataset(json).unwrap();
        let keys: Vec<&str> = dataset.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }
}
