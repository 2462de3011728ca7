//! Export module for fetching media and shaping the output.
//!
//! This module provides:
//! - Media list fetching with truncation
//! - Per-item detail fetching
//! - Explicit per-call outcomes
//! - The output document and run summary

pub mod detail;
pub mod document;
pub mod list;
pub mod outcome;
pub mod run;
pub mod state;

pub use detail::fetch_media_details;
pub use document::OutputDocument;
pub use list::fetch_media_list;
pub use outcome::FetchOutcome;
pub use run::collect_document;
pub use state::RunSummary;
