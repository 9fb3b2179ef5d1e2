//! Baseliner Export - renderers for [`AnalysisReport`] values.
//!
//! Pure formatting collaborators: each renderer consumes a finished report
//! and produces text. None of them inspects engine internals beyond the
//! report shape, so the engine can evolve behind its contract without
//! touching this crate.
//!
//! [`AnalysisReport`]: baseliner_core::AnalysisReport

pub mod json;
pub mod markdown;
pub mod summary;

pub use json::to_json_pretty;
pub use markdown::to_markdown;
pub use summary::to_summary;
