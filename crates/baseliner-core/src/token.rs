//! Usage tokens extracted from raw stylesheet text.

use serde::{Deserialize, Serialize};

/// Coarse grouping for a scanned usage, derived by keyword heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Layout,
    Color,
    VisualEffects,
    Transform,
    Spacing,
    Border,
    AtRule,
    Selector,
    Other,
}

impl Category {
    /// Returns the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Layout => "layout",
            Category::Color => "color",
            Category::VisualEffects => "visual-effects",
            Category::Transform => "transform",
            Category::Spacing => "spacing",
            Category::Border => "border",
            Category::AtRule => "at-rule",
            Category::Selector => "selector",
            Category::Other => "other",
        }
    }
}

/// One candidate feature usage found by the stylesheet scanner.
///
/// Ephemeral: tokens exist only between scanning and matching and carry
/// raw, unvalidated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageToken {
    /// Property name, at-keyword (`@container`) or selector form (`:has()`)
    pub property: String,
    /// Declaration value, or the whole line for at-rules and selectors
    pub value: String,
    /// Coarse category tag
    pub category: Category,
    /// 1-based source line the token came from
    pub line: usize,
}

impl UsageToken {
    pub fn new(
        property: impl Into<String>,
        value: impl Into<String>,
        category: Category,
        line: usize,
    ) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            category,
            line,
        }
    }
}
