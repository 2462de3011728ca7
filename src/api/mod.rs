//! Instagram Graph API module.
//!
//! This module provides:
//! - HTTP client for the Graph API media endpoints
//! - API response types

pub mod client;
pub mod types;

pub use client::{redact_token, GraphApi};
pub use types::*;
