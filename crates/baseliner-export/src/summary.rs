//! Natural-language report summaries.
//!
//! Produces the context block a conversational assistant receives alongside
//! a user question: counts, the overall score, and the warning features by
//! name. Only the report shape is consumed; there is no model client here.

use baseliner_core::AnalysisReport;
use std::fmt::Write;

/// Summarize a report as assistant-ready context text.
pub fn to_summary(report: &AnalysisReport<'_>) -> String {
    let mut out = String::from("Current analysis context:\n");

    let _ = writeln!(out, "- Total features detected: {}", report.total_matched());
    let _ = writeln!(out, "- Compatible features: {}", report.compatible.len());
    let _ = writeln!(out, "- Features with warnings: {}", report.warnings.len());
    let _ = writeln!(out, "- Incompatible features: {}", report.incompatible.len());
    let _ = writeln!(out, "- Overall score: {}/100", report.score);

    if !report.warnings.is_empty() {
        out.push_str("\nWarnings found:\n");
        for result in &report.warnings {
            let _ = writeln!(out, "- {}: {}", result.feature.name, result.feature.description);
        }
    }

    out
}
