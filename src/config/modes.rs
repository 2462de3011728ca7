//! Fetch mode and error policy definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How media is pulled from the Graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// One list call requesting every field (default).
    #[default]
    Flat,
    /// A list call for ids, then one detail call per id.
    Detailed,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Flat => write!(f, "flat"),
            FetchMode::Detailed => write!(f, "detailed"),
        }
    }
}

/// What to do when a Graph API call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the failure, leave the slot empty and keep going.
    #[default]
    Continue,
    /// Stop the run at the first failure without writing output.
    Abort,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Continue => write!(f, "continue"),
            ErrorPolicy::Abort => write!(f, "abort"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_config_names() {
        assert_eq!(FetchMode::Detailed.to_string(), "detailed");
        assert_eq!(ErrorPolicy::Abort.to_string(), "abort");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FetchMode::default(), FetchMode::Flat);
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Continue);
    }
}
