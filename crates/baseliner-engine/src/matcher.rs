//! Token-to-feature resolution.
//!
//! Maps one scanned usage token to at most one canonical feature via a
//! fixed rule chain. Precedence never depends on dataset iteration order:
//! the containment pass walks the index in sorted id order, and the
//! special-case table is evaluated top to bottom.

use crate::index::FeatureIndex;
use baseliner_core::{BaselineFeature, UsageToken};

/// Shape of one special-case entry: does a lowercased (property, value)
/// pair imply a specific feature id?
type ShapePredicate = fn(&str, &str) -> bool;

/// Special-case rules, evaluated in order after the containment pass.
///
/// A predicate hit whose target id is absent from the index falls through
/// to the next rule.
const SPECIAL_CASES: &[(ShapePredicate, &str)] = &[
    (|p, v| p == "display" && v.contains("flex"), "flexbox"),
    (|p, v| p == "display" && v.contains("grid"), "grid"),
    (|p, _| p == "gap", "gap"),
    (
        |p, v| p.starts_with("@container") || v.starts_with("@container"),
        "container-queries",
    ),
    (|p, _| p.contains("backdrop-filter"), "backdrop-filter"),
    (|p, _| p == "aspect-ratio", "aspect-ratio"),
    (
        |p, v| p.starts_with("@layer") || v.starts_with("@layer"),
        "cascade-layers",
    ),
    (|_, v| v.contains("color-mix"), "color-mix"),
    (|p, _| p.contains("scroll-snap"), "scroll-snap"),
    (
        |p, _| p.contains("margin-inline") || p.contains("padding-block"),
        "logical-properties",
    ),
    (|p, _| p.contains("view-transition"), "view-transitions"),
    (|p, _| p.contains("anchor"), "anchor-positioning"),
];

/// Resolves usage tokens against a feature index.
pub struct FeatureMatcher<'a> {
    index: &'a FeatureIndex,
}

impl<'a> FeatureMatcher<'a> {
    pub fn new(index: &'a FeatureIndex) -> Self {
        Self { index }
    }

    /// Resolve a token to its canonical feature, or `None`.
    ///
    /// Rule order, first hit wins:
    /// 1. containment: a feature whose stylesheet property string contains
    ///    the token property (case-insensitive);
    /// 2. the special-case table;
    /// 3. no match: the token is dropped silently. Unknown usages are not
    ///    reported; keeping them out of the report is the noise-reduction
    ///    policy, not an oversight.
    pub fn resolve(&self, token: &UsageToken) -> Option<&'a BaselineFeature> {
        let property = token.property.to_lowercase();
        let value = token.value.to_lowercase();

        if let Some(feature) = self
            .index
            .features()
            .find(|f| f.css_property.to_lowercase().contains(&property))
        {
            return Some(feature);
        }

        for (applies, id) in SPECIAL_CASES {
            if applies(&property, &value) {
                if let Some(feature) = self.index.get(id) {
                    return Some(feature);
                }
            }
        }

        None
    }
}
