//! Baseliner Adapters - turn non-stylesheet inputs into scannable text.
//!
//! Two input-side collaborators sit in front of the engine:
//!
//! - [`html::extract_style_blocks`]: pull inline `<style>` contents out of a
//!   fetched page (the caller does the fetching; this crate never touches
//!   the network).
//! - [`design::to_css`]: synthesize a stylesheet from a design tool's
//!   structured feature list.
//!
//! Both produce plain stylesheet text for the engine's scanner and know
//! nothing about indexes, matching, or scores.

pub mod design;
pub mod html;

pub use design::{to_css, DesignFeature, DesignPayload};
pub use html::extract_style_blocks;

/// Result type for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;

/// Error types for input adapters
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
