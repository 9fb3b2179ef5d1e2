//! Baseliner CLI - CSS Baseline compatibility analyzer.

mod commands;
mod config;
mod display;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "baseliner")]
#[command(about = "Analyze stylesheet text for Baseline browser compatibility", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Stylesheet files to analyze ("-" reads from stdin)
    ///
    /// Examples:
    ///   baseliner styles.css          # Analyze one file
    ///   baseliner a.css b.css         # Analyze several files
    ///   cat styles.css | baseliner -  # Analyze stdin
    #[arg(value_name = "PATHS", default_values = ["-"])]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Output JSON format (alias for --output json)
    #[arg(long)]
    json: bool,

    /// Load a web-features dataset snapshot from disk instead of the
    /// embedded one
    #[arg(long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Configuration file path (defaults to ./.baseliner.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List the features the index knows about
    Features,
    /// Extract inline <style> blocks from an HTML file and analyze them
    ScanHtml {
        /// HTML file to scan
        file: PathBuf,
    },
    /// Analyze a design-tool feature payload (JSON)
    ScanDesign {
        /// Payload file as exported by a design-tool plugin
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Markdown,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::Config::load(cli.config.as_deref())?;

    let format = if cli.json {
        OutputFormat::Json
    } else if cli.format == OutputFormat::Human {
        // Config supplies a default only when no explicit flag was given
        config.output_format().unwrap_or(cli.format)
    } else {
        cli.format
    };

    let dataset_path = cli.dataset.or_else(|| config.dataset_path());
    let analyzer = commands::build_analyzer(dataset_path.as_deref())?;

    match cli.command {
        Some(Command::Features) => commands::list_features(analyzer.index()),
        Some(Command::ScanHtml { file }) => commands::scan_html(&analyzer, &file, format),
        Some(Command::ScanDesign { file }) => commands::scan_design(&analyzer, &file, format),
        None => commands::analyze_paths(&analyzer, &cli.paths, format),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
