//! Built-in dataset snapshot embedded in the binary.
//!
//! A curated snapshot of the `web-features` dataset covering the CSS
//! features the scanner can detect, embedded at compile time via
//! `include_str!()` for zero-config defaults. Hosts that track upstream can
//! load a full `data.json` from disk instead.

use crate::index::IndexBuild;
use crate::{FeatureIndex, Result};

/// Embedded `web-features` snapshot (CSS subset)
pub const WEB_FEATURES_SNAPSHOT: &str = include_str!("built_in/web_features.json");

/// Build a feature index from the embedded snapshot.
pub fn load_built_in_index() -> Result<FeatureIndex> {
    let IndexBuild { index, skipped } = FeatureIndex::from_json_str(WEB_FEATURES_SNAPSHOT)?;
    debug_assert_eq!(skipped, 0, "embedded snapshot must be fully usable");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseliner_core::BaselineStatus;

    #[test]
    fn test_snapshot_parses_without_skips() {
        let build = FeatureIndex::from_json_str(WEB_FEATURES_SNAPSHOT).unwrap();
        assert_eq!(build.skipped, 0);
        assert!(build.index.len() >= 15);
    }

    #[test]
    fn test_snapshot_covers_special_case_targets() {
        let index = load_built_in_index().unwrap();
        for id in [
            "flexbox",
            "grid",
            "gap",
            "container-queries",
            "backdrop-filter",
            "aspect-ratio",
            "cascade-layers",
            "color-mix",
            "scroll-snap",
            "logical-properties",
            "view-transitions",
            "anchor-positioning",
        ] {
            assert!(index.get(id).is_some(), "snapshot is missing {id}");
        }
    }

    #[test]
    fn test_snapshot_spans_all_tiers() {
        let index = load_built_in_index().unwrap();
        for status in BaselineStatus::all() {
            assert!(
                index.features().any(|f| f.status == *status),
                "no snapshot feature with status {status}"
            );
        }
    }
}
