//! Baseliner Core - shared data types for Baseline compatibility analysis.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//!
//! - [`BaselineFeature`]: a normalized record for one web-platform capability
//! - [`BaselineStatus`]: the four ordered Baseline support tiers
//! - [`UsageToken`]: one detected feature usage extracted from stylesheet text
//! - [`MatchResult`] and [`AnalysisReport`]: the engine's output shapes
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  baseliner-cli   │  (User interface)
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ baseliner-engine │  (Scan → match → classify → score)
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ baseliner-core   │  (This crate - types only)
//! └──────────────────┘
//! ```
//!
//! The report types borrow their [`BaselineFeature`] records from the
//! feature index that produced them, so a report never outlives the index
//! it was computed against.

pub mod feature;
pub mod report;
pub mod status;
pub mod token;

// Re-export core types for convenience
pub use feature::{BaselineFeature, BrowserSupport};
pub use report::{AnalysisReport, BrowserScores, MatchResult};
pub use status::{BaselineStatus, Browser};
pub use token::{Category, UsageToken};
