//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ErrorPolicy, FetchMode};

/// Instagram media export CLI.
#[derive(Parser, Debug)]
#[command(
    name = "graph-media-export",
    version,
    about = "Export recent Instagram media metadata to a JSON file",
    long_about = "Fetches the most recent media of an Instagram account through the Graph API\n\
                  and writes the metadata to a pretty-printed JSON file."
)]
pub struct Args {
    /// Graph API access token.
    #[arg(short, long, env = "accessToken", hide_env_values = true)]
    pub token: Option<String>,

    /// Instagram user id whose media is listed (defaults to the token owner).
    #[arg(short, long = "user-id", env = "userId")]
    pub user_id: Option<String>,

    /// Fetch mode.
    #[arg(short, long, value_enum)]
    pub mode: Option<FetchModeArg>,

    /// Number of most recent media items to keep.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Stop at the first failed request instead of leaving its slot empty.
    #[arg(long)]
    pub strict: bool,

    /// Maximum detail requests in flight (detailed mode).
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Graph API base URL.
    #[arg(long, hide = true)]
    pub api_base: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide the progress bar and run statistics.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI fetch mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FetchModeArg {
    /// One list request with every field.
    Flat,
    /// A list request for ids, then one request per item.
    Detailed,
}

impl From<FetchModeArg> for FetchMode {
    fn from(arg: FetchModeArg) -> Self {
        match arg {
            FetchModeArg::Flat => FetchMode::Flat,
            FetchModeArg::Detailed => FetchMode::Detailed,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Override account settings if provided
        if let Some(token) = self.token {
            config.account.access_token = token;
        }

        if let Some(user_id) = self.user_id {
            config.account.user_id = Some(user_id);
        }

        // Override options if provided
        if let Some(mode) = self.mode {
            config.options.fetch_mode = mode.into();
        }

        if let Some(limit) = self.limit {
            config.options.limit = limit;
        }

        if let Some(output) = self.output {
            config.options.output_path = output;
        }

        if let Some(concurrency) = self.concurrency {
            config.options.detail_concurrency = concurrency;
        }

        if let Some(timeout) = self.timeout {
            config.options.request_timeout_seconds = Some(timeout);
        }

        if let Some(api_base) = self.api_base {
            config.options.api_base = api_base;
        }

        // Boolean flags (only override if set to non-default)
        if self.strict {
            config.options.on_error = ErrorPolicy::Abort;
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }
}
