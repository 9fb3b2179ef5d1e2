use anyhow::{Context, Result};
use baseliner_adapters::extract_style_blocks;
use baseliner_core::BaselineStatus;
use baseliner_engine::{Analyzer, FeatureIndex};
use baseliner_export::{to_json_pretty, to_markdown};
use colored::*;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::display;
use crate::OutputFormat;

/// Build an analyzer backed either by the embedded web-features snapshot or
/// by a dataset file supplied on the command line.
pub fn build_analyzer(dataset: Option<&Path>) -> Result<Analyzer> {
    let index = match dataset {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read dataset: {}", path.display()))?;
            let build = FeatureIndex::from_json_str(&json)
                .with_context(|| format!("failed to parse dataset: {}", path.display()))?;
            if build.skipped > 0 {
                tracing::warn!(skipped = build.skipped, "dataset records were skipped");
            }
            build.index
        }
        None => baseliner_engine::load_built_in_index()
            .context("failed to load the embedded web-features snapshot")?,
    };
    Analyzer::new(index).context("failed to initialize the analyzer")
}

/// Analyze each path in turn. "-" reads from stdin.
pub fn analyze_paths(analyzer: &Analyzer, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    for path in paths {
        let (label, css) = read_stylesheet(path)?;
        let report = analyzer.analyze(&css);

        match format {
            OutputFormat::Human => display::print_report(&label, &report),
            OutputFormat::Json => println!("{}", to_json_pretty(&report)),
            OutputFormat::Markdown => print!("{}", to_markdown(&report)),
        }
    }
    Ok(())
}

/// Extract inline `<style>` blocks from an HTML file and analyze them as a
/// single stylesheet.
pub fn scan_html(analyzer: &Analyzer, file: &Path, format: OutputFormat) -> Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read HTML file: {}", file.display()))?;
    let css = extract_style_blocks(&html)?;

    if css.trim().is_empty() {
        anyhow::bail!("no inline <style> blocks found in {}", file.display());
    }

    let report = analyzer.analyze(&css);
    match format {
        OutputFormat::Human => display::print_report(&file.display().to_string(), &report),
        OutputFormat::Json => println!("{}", to_json_pretty(&report)),
        OutputFormat::Markdown => print!("{}", to_markdown(&report)),
    }
    Ok(())
}

/// Synthesize CSS from a design-tool feature payload and analyze it.
pub fn scan_design(analyzer: &Analyzer, file: &Path, format: OutputFormat) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read design payload: {}", file.display()))?;
    let payload: baseliner_adapters::DesignPayload = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse design payload: {}", file.display()))?;
    let css = baseliner_adapters::to_css(&payload);

    let report = analyzer.analyze(&css);
    match format {
        OutputFormat::Human => display::print_report(&file.display().to_string(), &report),
        OutputFormat::Json => println!("{}", to_json_pretty(&report)),
        OutputFormat::Markdown => print!("{}", to_markdown(&report)),
    }
    Ok(())
}

/// List every feature the index can match, grouped by Baseline status.
pub fn list_features(index: &FeatureIndex) -> Result<()> {
    println!(
        "{}",
        format!("{} features in the index", index.len()).bold()
    );
    println!();

    for &status in BaselineStatus::all() {
        let mut features: Vec<_> = index
            .features()
            .filter(|f| f.status == status)
            .collect();
        if features.is_empty() {
            continue;
        }
        features.sort_by(|a, b| a.name.cmp(&b.name));

        println!("{}", status.display_name().bold());
        for feature in features {
            println!(
                "  {:28} {}",
                feature.name.cyan(),
                feature.css_property.bright_black()
            );
        }
        println!();
    }
    Ok(())
}

fn read_stylesheet(path: &Path) -> Result<(String, String)> {
    if path == Path::new("-") {
        let mut css = String::new();
        std::io::stdin()
            .read_to_string(&mut css)
            .context("failed to read stylesheet from stdin")?;
        Ok(("<stdin>".to_string(), css))
    } else {
        let css = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read stylesheet: {}", path.display()))?;
        Ok((path.display().to_string(), css))
    }
}
