//! Graph Media Export - save recent Instagram media metadata as JSON.
//!
//! This library fetches an account's most recent media through the Instagram
//! Graph API and writes it to a pretty-printed JSON file.
//!
//! # Features
//!
//! - Flat mode: one list request with every field
//! - Detailed mode: a list request for ids, then one request per item
//! - Configurable truncation count and output path
//! - Explicit per-request outcomes with a continue or abort policy
//! - Optional bounded concurrency for detail requests, order preserved
//!
//! # Example
//!
//! ```no_run
//! use graph_media_export::{collect_document, save_document, Config, GraphApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.account.access_token = std::env::var("accessToken")?;
//!
//!     let api = GraphApi::from_config(&config)?;
//!     let (document, _summary) = collect_document(&api, &config).await?;
//!     save_document(&document, &config.options.output_path).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::GraphApi;
pub use config::{Config, ErrorPolicy, FetchMode};
pub use error::{Error, Result};
pub use export::{collect_document, FetchOutcome, OutputDocument, RunSummary};
pub use fs::save_document;
pub use media::{MediaItem, MediaType};
