//! Canonical feature records produced by the feature index.

use crate::status::{BaselineStatus, Browser};
use serde::{Deserialize, Serialize};

/// Per-browser optional version data attached to a canonical feature.
///
/// An entry that is `None` (or empty) means the upstream dataset recorded
/// no supporting version for that browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSupport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chrome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firefox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safari: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge: Option<String>,
}

impl BrowserSupport {
    /// Version string recorded for one browser, if any
    pub fn get(&self, browser: Browser) -> Option<&str> {
        match browser {
            Browser::Chrome => self.chrome.as_deref(),
            Browser::Firefox => self.firefox.as_deref(),
            Browser::Safari => self.safari.as_deref(),
            Browser::Edge => self.edge.as_deref(),
        }
    }

    /// Whether the dataset records real support for this browser.
    ///
    /// An absent or empty entry counts as unsupported.
    pub fn supports(&self, browser: Browser) -> bool {
        self.get(browser).is_some_and(|v| !v.is_empty())
    }
}

/// A normalized record for one web-platform capability.
///
/// Built once by the feature index and immutable afterwards; match results
/// reference these records by shared borrow rather than copying them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineFeature {
    /// Unique feature identifier within the index (e.g. `container-queries`)
    pub id: String,
    /// Human-readable display name
    pub name: String,
    /// The stylesheet property string detection matches against
    pub css_property: String,
    /// Baseline support tier
    pub status: BaselineStatus,
    /// Date the feature entered its current Baseline tier, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_since: Option<String>,
    /// Human description of the feature
    pub description: String,
    /// Fallback guidance for limited-support features, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Per-browser version data
    pub browser_support: BrowserSupport,
    /// Upstream grouping tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Specification URL, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
}
