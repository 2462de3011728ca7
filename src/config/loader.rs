//! Configuration structures and loading logic.

use crate::config::modes::{ErrorPolicy, FetchMode};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default Graph API base URL.
pub const DEFAULT_API_BASE: &str = "https://graph.instagram.com";

/// Default number of media items kept from the list call.
pub const DEFAULT_LIMIT: usize = 20;

/// Default output file name.
pub const DEFAULT_OUTPUT_PATH: &str = "output.json";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Graph API access token.
    #[serde(default)]
    pub access_token: String,

    /// Instagram user id. Falls back to `me` when unset.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Fetch and output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Fetch mode (flat, detailed).
    #[serde(default)]
    pub fetch_mode: FetchMode,

    /// Number of media items kept from the list call.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Where the JSON document is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Behaviour on a failed API call.
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Maximum detail requests in flight (detailed mode only).
    #[serde(default = "default_concurrency")]
    pub detail_concurrency: usize,

    /// Per-request timeout. No timeout when unset.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,

    /// Graph API base URL.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Whether to show the detail progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            fetch_mode: FetchMode::default(),
            limit: DEFAULT_LIMIT,
            output_path: default_output_path(),
            on_error: ErrorPolicy::default(),
            detail_concurrency: 1,
            request_timeout_seconds: None,
            api_base: default_api_base(),
            show_progress: true,
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_concurrency() -> usize {
    1
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path segment owning the media collection: the user id, or `me`.
    pub fn media_owner(&self) -> &str {
        self.account.user_id.as_deref().unwrap_or("me")
    }

    /// Per-request timeout, if configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.options.request_timeout_seconds.map(Duration::from_secs)
    }
}
