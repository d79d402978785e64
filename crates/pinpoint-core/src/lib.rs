//! Core types for the pinpoint line locator.
//!
//! This crate provides document loading, the windowed keyword-line locator,
//! and the search-plan data model used by the `pinpoint` binary.

/// Source document loading.
pub mod document;
/// Error types and result definitions.
pub mod error;
/// The windowed keyword-line locator.
pub mod locate;
/// Search-plan data model.
pub mod plan;

pub use document::SourceDocument;
pub use error::{Error, Result};
pub use locate::{MatchWindow, locate};
pub use plan::{SearchPlan, SearchRequest};
