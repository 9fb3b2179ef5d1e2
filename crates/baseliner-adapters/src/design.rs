//! Design-tool payloads → synthesized stylesheet text.
//!
//! Design plugins report the features a document uses as a structured list
//! rather than as CSS. This adapter renders that list into stylesheet text
//! the scanner understands, one class rule per reported node.

use serde::Deserialize;
use std::fmt::Write;

/// One feature usage reported by a design tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignFeature {
    /// Name of the design node the feature was found on
    pub node_name: String,
    /// Which capability the node uses (e.g. `flexbox`, `gap`)
    pub feature_key: String,
    /// Tool-specific value text, when the capability carries one
    #[serde(default)]
    pub value: Option<String>,
}

/// A full design-tool payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPayload {
    pub features: Vec<DesignFeature>,
    #[serde(default)]
    pub node_count: Option<usize>,
    #[serde(default)]
    pub node_name: Option<String>,
}

/// Synthesize stylesheet text from a design payload.
///
/// Unknown feature keys produce an empty rule body rather than an error;
/// the scanner will simply find nothing in them.
pub fn to_css(payload: &DesignPayload) -> String {
    let mut css = String::from("/* Generated from design tool */\n\n");

    for feature in &payload.features {
        let class_name = slugify(&feature.node_name);
        let _ = writeln!(css, ".{class_name} {{");
        emit_declarations(&mut css, feature);
        css.push_str("}\n\n");
    }

    css
}

fn emit_declarations(css: &mut String, feature: &DesignFeature) {
    let value = feature.value.as_deref();
    match feature.feature_key.as_str() {
        "flexbox" => {
            css.push_str("  display: flex;\n");
            if value.is_some_and(|v| v.contains("row")) {
                css.push_str("  flex-direction: row;\n");
            } else {
                css.push_str("  flex-direction: column;\n");
            }
        }
        "grid" => {
            css.push_str("  display: grid;\n");
            css.push_str("  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));\n");
        }
        "gap" => {
            let _ = writeln!(css, "  gap: {};", value.unwrap_or("0"));
        }
        "backdrop-filter" => {
            let effect = value.unwrap_or("none");
            let _ = writeln!(css, "  backdrop-filter: {effect};");
            let _ = writeln!(css, "  -webkit-backdrop-filter: {effect};");
        }
        "aspect-ratio" => {
            let ratio = value.map(|v| v.replace(':', " / "));
            let _ = writeln!(css, "  aspect-ratio: {};", ratio.as_deref().unwrap_or("auto"));
        }
        "border-radius" => {
            let _ = writeln!(css, "  border-radius: {};", value.unwrap_or("0"));
        }
        "transform" => {
            let _ = writeln!(css, "  transform: rotate({});", value.unwrap_or("0deg"));
        }
        _ => {}
    }
}

/// `"Hero Card!" → "hero-card"`: lowercase, spaces to hyphens, everything
/// outside `[a-z0-9-]` dropped.
fn slugify(node_name: &str) -> String {
    node_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(features: Vec<DesignFeature>) -> DesignPayload {
        DesignPayload {
            features,
            node_count: None,
            node_name: None,
        }
    }

    fn feature(node: &str, key: &str, value: Option<&str>) -> DesignFeature {
        DesignFeature {
            node_name: node.to_string(),
            feature_key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_flexbox_direction_from_value() {
        let css = to_css(&payload(vec![feature("Nav Bar", "flexbox", Some("row"))]));
        assert!(css.contains(".nav-bar {"));
        assert!(css.contains("display: flex;"));
        assert!(css.contains("flex-direction: row;"));
    }

    #[test]
    fn test_flexbox_defaults_to_column() {
        let css = to_css(&payload(vec![feature("Stack", "flexbox", None)]));
        assert!(css.contains("flex-direction: column;"));
    }

    #[test]
    fn test_aspect_ratio_colon_becomes_slash() {
        let css = to_css(&payload(vec![feature("Video", "aspect-ratio", Some("16:9"))]));
        assert!(css.contains("aspect-ratio: 16 / 9;"));
    }

    #[test]
    fn test_backdrop_filter_emits_webkit_prefix() {
        let css = to_css(&payload(vec![feature(
            "Glass Panel",
            "backdrop-filter",
            Some("blur(10px)"),
        )]));
        assert!(css.contains("backdrop-filter: blur(10px);"));
        assert!(css.contains("-webkit-backdrop-filter: blur(10px);"));
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Hero Card!"), "hero-card");
        assert_eq!(slugify("Card 2 (copy)"), "card-2-copy");
    }

    #[test]
    fn test_unknown_key_yields_empty_rule() {
        let css = to_css(&payload(vec![feature("Node", "holograms", None)]));
        assert!(css.contains(".node {"));
        assert!(!css.contains("display:"));
    }

    #[test]
    fn test_payload_deserializes_camel_case() {
        let payload: DesignPayload = serde_json::from_str(
            r#"{ "features": [{ "nodeName": "Hero", "featureKey": "gap", "value": "8px" }], "nodeCount": 3 }"#,
        )
        .unwrap();
        assert_eq!(payload.features.len(), 1);
        assert_eq!(payload.node_count, Some(3));
        let css = to_css(&payload);
        assert!(css.contains("gap: 8px;"));
    }
}
