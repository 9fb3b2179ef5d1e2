//! Configuration file support.
//!
//! Baseliner reads an optional TOML file, `.baseliner.toml` in the current
//! directory by default:
//!
//! ```toml
//! [output]
//! format = "markdown"
//!
//! [dataset]
//! path = "snapshots/web-features.json"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

const DEFAULT_CONFIG_FILE: &str = ".baseliner.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    output: OutputSection,
    #[serde(default)]
    dataset: DatasetSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetSection {
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, or fall back to
    /// `.baseliner.toml` in the working directory. A missing fallback file
    /// yields the default configuration; a missing explicit path is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        match self.output.format.as_deref() {
            Some("human") => Some(OutputFormat::Human),
            Some("json") => Some(OutputFormat::Json),
            Some("markdown") => Some(OutputFormat::Markdown),
            _ => None,
        }
    }

    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset.path.clone()
    }
}
