//! JSON export.

use baseliner_core::AnalysisReport;

/// Pretty-printed JSON for a report.
///
/// Serialization of a report cannot fail (no maps with non-string keys, no
/// fallible custom impls), so this returns a plain `String`.
pub fn to_json_pretty(report: &AnalysisReport<'_>) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}
