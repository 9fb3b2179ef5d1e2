use baseliner_core::{AnalysisReport, BaselineStatus, Browser, MatchResult};
use colored::*;

/// Render an analysis report for a terminal.
pub fn print_report(source: &str, report: &AnalysisReport<'_>) {
    println!("{}", format!("Baseline report for {source}").bold());
    println!();

    if report.is_empty() {
        println!(
            "  {} No known features detected. Score: {}",
            "•".bright_black(),
            score_colored(report.score)
        );
        println!();
        return;
    }

    println!(
        "  Overall score: {}   ({} matched)",
        score_colored(report.score),
        report.total_matched()
    );
    println!();

    print_bucket("Widely available", &report.compatible);
    print_bucket("Needs attention", &report.warnings);
    print_bucket("Not Baseline", &report.incompatible);

    println!("{}", "Browser support".bold());
    for &browser in Browser::all() {
        let score = report.browser_scores.get(browser);
        println!(
            "  {:8} {}",
            browser.display_name(),
            score_colored(score)
        );
    }
    println!();
}

fn print_bucket(title: &str, matches: &[MatchResult<'_>]) {
    if matches.is_empty() {
        return;
    }

    println!("{} ({})", title.bold(), matches.len());
    for result in matches {
        let feature = result.feature;
        println!(
            "  {} {} {}",
            status_icon(feature.status),
            status_colored(feature.status, &feature.name),
            result.css_property.bright_black()
        );
        if let Some(context) = &result.context {
            println!("      {}", context.bright_black());
        }
        if feature.status != BaselineStatus::WidelyAvailable {
            if let Some(fallback) = &feature.fallback {
                println!("      {} {}", "fallback:".bright_black(), fallback);
            }
        }
    }
    println!();
}

fn status_icon(status: BaselineStatus) -> &'static str {
    match status {
        BaselineStatus::WidelyAvailable => "✅",
        BaselineStatus::NewlyAvailable => "🆕",
        BaselineStatus::Limited => "⚠️",
        BaselineStatus::NotAvailable => "❌",
    }
}

fn status_colored(status: BaselineStatus, text: &str) -> ColoredString {
    match status {
        BaselineStatus::WidelyAvailable => text.green(),
        BaselineStatus::NewlyAvailable => text.blue(),
        BaselineStatus::Limited => text.yellow(),
        BaselineStatus::NotAvailable => text.red(),
    }
}

fn score_colored(score: u8) -> ColoredString {
    let text = format!("{score}%");
    if score >= 80 {
        text.green()
    } else if score >= 50 {
        text.yellow()
    } else {
        text.red()
    }
}
