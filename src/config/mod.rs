//! Configuration module for graph-media-export.
//!
//! This module handles:
//! - Loading configuration from TOML files and the environment
//! - Fetch mode and error policy selection
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{AccountConfig, Config, OptionsConfig};
pub use modes::{ErrorPolicy, FetchMode};
pub use validation::validate_config;
