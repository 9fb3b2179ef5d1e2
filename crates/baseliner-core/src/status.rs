//! Baseline support tiers and target browsers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How safely a web-platform feature can be used across browsers.
///
/// Tiers are ordered from safest to least safe:
/// `WidelyAvailable > NewlyAvailable > Limited > NotAvailable`.
/// A feature whose upstream status is unknown is normalized to
/// [`BaselineStatus::Limited`], never silently widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineStatus {
    /// Supported by all target browsers for 30+ months
    WidelyAvailable,
    /// Supported by the latest version of every target browser
    NewlyAvailable,
    /// Missing from at least one target browser, or status unknown
    Limited,
    /// Explicitly flagged as not part of Baseline
    NotAvailable,
}

impl BaselineStatus {
    /// Returns all statuses in tier order, safest first
    pub fn all() -> &'static [BaselineStatus] {
        &[
            BaselineStatus::WidelyAvailable,
            BaselineStatus::NewlyAvailable,
            BaselineStatus::Limited,
            BaselineStatus::NotAvailable,
        ]
    }

    /// Returns the kebab-case wire name for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            BaselineStatus::WidelyAvailable => "widely-available",
            BaselineStatus::NewlyAvailable => "newly-available",
            BaselineStatus::Limited => "limited",
            BaselineStatus::NotAvailable => "not-available",
        }
    }

    /// Returns the display name for this status
    pub fn display_name(&self) -> &'static str {
        match self {
            BaselineStatus::WidelyAvailable => "Widely available",
            BaselineStatus::NewlyAvailable => "Newly available",
            BaselineStatus::Limited => "Limited availability",
            BaselineStatus::NotAvailable => "Not available",
        }
    }
}

impl fmt::Display for BaselineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four browsers a support map is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl Browser {
    /// Returns all target browsers in a consistent order
    pub fn all() -> &'static [Browser] {
        &[
            Browser::Chrome,
            Browser::Firefox,
            Browser::Safari,
            Browser::Edge,
        ]
    }

    /// Returns the display name for this browser
    pub fn display_name(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
            Browser::Edge => "Edge",
        }
    }
}
