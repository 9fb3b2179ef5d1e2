//! Markdown report rendering.

use baseliner_core::{AnalysisReport, Browser, MatchResult};
use std::fmt::Write;

/// Render a report as a Markdown document: summary counts, browser-support
/// table, per-bucket feature lists, and a closing recommendation.
pub fn to_markdown(report: &AnalysisReport<'_>) -> String {
    let mut out = String::new();

    out.push_str("# CSS Baseline Compatibility Report\n\n");

    out.push_str("## Summary\n\n");
    let _ = writeln!(out, "- Total Features Analyzed: {}", report.total_matched());
    let _ = writeln!(out, "- Compatible Features: {}", report.compatible.len());
    let _ = writeln!(out, "- Features with Warnings: {}", report.warnings.len());
    let _ = writeln!(out, "- Incompatible Features: {}", report.incompatible.len());
    let _ = writeln!(out, "- Overall Score: {}/100", report.score);

    out.push_str("\n## Browser Support\n\n");
    out.push_str("| Browser | Support Score |\n");
    out.push_str("|---------|---------------|\n");
    for browser in Browser::all() {
        let _ = writeln!(
            out,
            "| {} | {}% |",
            browser.display_name(),
            report.browser_scores.get(*browser)
        );
    }

    out.push_str("\n## Compatible Features\n\n");
    push_bucket(&mut out, &report.compatible, |m| {
        format!("- {} ({})", m.feature.name, m.css_property)
    });

    out.push_str("\n## Warnings\n\n");
    push_bucket(&mut out, &report.warnings, |m| {
        let mut line = format!("- {}: {}", m.feature.name, m.feature.description);
        if let Some(fallback) = &m.feature.fallback {
            let _ = write!(line, " | Fallback: {fallback}");
        }
        line
    });

    out.push_str("\n## Incompatible Features\n\n");
    push_bucket(&mut out, &report.incompatible, |m| {
        format!("- {}: {}", m.feature.name, m.feature.description)
    });

    out.push_str("\n## Recommendations\n\n");
    if report.warnings.is_empty() && report.incompatible.is_empty() {
        out.push_str("All detected features are widely supported.\n");
    } else {
        out.push_str(
            "Some features have limited browser support. Consider providing fallbacks.\n",
        );
    }

    out
}

fn push_bucket<F>(out: &mut String, bucket: &[MatchResult<'_>], render: F)
where
    F: Fn(&MatchResult<'_>) -> String,
{
    if bucket.is_empty() {
        out.push_str("None\n");
        return;
    }
    for result in bucket {
        out.push_str(&render(result));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baseliner_engine::{built_in, Analyzer};

    fn analyzer() -> Analyzer {
        Analyzer::new(built_in::load_built_in_index().unwrap()).unwrap()
    }

    #[test]
    fn test_markdown_counts_round_trip() {
        let analyzer = analyzer();
        let report = analyzer.analyze(
            "display: flex;\ngap: 1rem;\nbackdrop-filter: blur(2px);\nanchor-name: --a;\n",
        );
        let markdown = to_markdown(&report);

        // The rendered counts must reproduce the report's counts exactly
        assert!(markdown.contains(&format!(
            "- Total Features Analyzed: {}",
            report.total_matched()
        )));
        assert!(markdown.contains(&format!(
            "- Compatible Features: {}",
            report.compatible.len()
        )));
        assert!(markdown.contains(&format!(
            "- Features with Warnings: {}",
            report.warnings.len()
        )));
        assert!(markdown.contains(&format!(
            "- Incompatible Features: {}",
            report.incompatible.len()
        )));

        // Every detected feature name appears once per its bucket
        for result in report.all_matches() {
            assert!(markdown.contains(result.feature.name.as_str()));
        }
    }

    #[test]
    fn test_markdown_empty_report() {
        let analyzer = analyzer();
        let report = analyzer.analyze("");
        let markdown = to_markdown(&report);
        assert!(markdown.contains("- Overall Score: 100/100"));
        assert!(markdown.contains("All detected features are widely supported."));
        assert_eq!(markdown.matches("None").count(), 3);
    }

    #[test]
    fn test_markdown_browser_table() {
        let analyzer = analyzer();
        let report = analyzer.analyze("view-transition-name: hero;");
        let markdown = to_markdown(&report);
        assert!(markdown.contains("| Chrome | 100% |"));
        assert!(markdown.contains("| Firefox | 0% |"));
    }
}
