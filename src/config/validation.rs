//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_token(&config.account.access_token)?;
    if let Some(user_id) = &config.account.user_id {
        validate_user_id(user_id)?;
    }
    validate_limit(config.options.limit)?;
    validate_concurrency(config.options.detail_concurrency)?;
    validate_api_base(&config.options.api_base)?;

    Ok(())
}

/// Validate the access token.
pub fn validate_token(token: &str) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::MissingConfig(
            "access_token (set accessToken in the environment or .env)".to_string(),
        ));
    }

    if token.chars().any(char::is_whitespace) {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token must not contain whitespace".to_string(),
        });
    }

    // Check for placeholder values
    let token_lower = token.to_lowercase();
    if token_lower.contains("replaceme") || token_lower.contains("your_token") {
        return Err(Error::ConfigValidation {
            field: "access_token".to_string(),
            message: "Token appears to be a placeholder. Please provide your actual access token."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the user id: `me` or a numeric Instagram id.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    let id_pattern = Regex::new(r"^(me|\d+)$").expect("static regex");

    if !id_pattern.is_match(user_id) {
        return Err(Error::ConfigValidation {
            field: "user_id".to_string(),
            message: format!(
                "Invalid user id: '{}'. Must be 'me' or a numeric id.",
                user_id
            ),
        });
    }

    Ok(())
}

/// Validate the truncation count.
pub fn validate_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(Error::ConfigValidation {
            field: "limit".to_string(),
            message: "Limit must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the detail concurrency.
pub fn validate_concurrency(concurrency: usize) -> Result<()> {
    if concurrency == 0 {
        return Err(Error::ConfigValidation {
            field: "detail_concurrency".to_string(),
            message: "Concurrency must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the API base URL.
pub fn validate_api_base(api_base: &str) -> Result<()> {
    let url = Url::parse(api_base)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "api_base".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}
