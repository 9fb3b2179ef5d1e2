//! Baseliner Engine - feature detection and Baseline classification.
//!
//! This crate turns a block of stylesheet text into a compatibility verdict:
//!
//! ```text
//! raw text ──► StylesheetScanner ──► UsageToken*
//!                                        │
//!          FeatureIndex ──► FeatureMatcher ──► matched / dropped
//!                                        │
//!                          classify ──► three buckets ──► scores
//! ```
//!
//! The [`FeatureIndex`] is built once from a `web-features` dataset snapshot
//! (embedded or loaded from disk) and is read-only afterwards. Each
//! [`Analyzer::analyze`] call is a pure, synchronous function of
//! `(text, index)`: it performs no I/O, never fails on stylesheet content,
//! and may run concurrently from any number of threads.
//!
//! # Example
//!
//! ```
//! use baseliner_engine::{built_in, Analyzer};
//!
//! let index = built_in::load_built_in_index().expect("embedded dataset");
//! let analyzer = Analyzer::new(index).expect("scanner patterns");
//!
//! let report = analyzer.analyze(".card {\n  display: flex;\n  gap: 1rem;\n}\n");
//! assert_eq!(report.total_matched(), 2);
//! ```

pub mod analyzer;
pub mod built_in;
pub mod classify;
pub mod dataset;
pub mod index;
pub mod matcher;
pub mod scanner;
pub mod score;

// Re-export core types
pub use analyzer::Analyzer;
pub use built_in::load_built_in_index;
pub use classify::{classify, Buckets};
pub use dataset::{RawDataset, RawFeature};
pub use index::{FeatureIndex, IndexBuild};
pub use matcher::FeatureMatcher;
pub use scanner::StylesheetScanner;
pub use score::{browser_scores, overall_score};

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Error types for the analysis engine.
///
/// Stylesheet content can never produce one of these: the scanner and
/// matcher are total. Only dataset loading and pattern compilation fail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid dataset JSON: {0}")]
    DatasetParse(#[from] serde_json::Error),

    #[error("Dataset contains no usable feature records")]
    EmptyDataset,

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
