//! Instagram Graph API HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::types::*;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::media::fields::join_fields;
use crate::media::MediaItem;

/// Query parameter carrying the access token.
const TOKEN_PARAM: &str = "access_token";

/// Longest slice of an unparseable body kept in error messages.
const MAX_BODY_IN_ERROR: usize = 500;

/// Graph API client bound to one access token.
pub struct GraphApi {
    client: Client,
    base: Url,
    token: String,
}

impl GraphApi {
    /// Create a new API client.
    pub fn new(api_base: &str, token: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base: Url::parse(api_base)?,
            token,
        })
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.options.api_base,
            config.account.access_token.clone(),
            config.request_timeout(),
        )
    }

    /// Build an endpoint URL from path segments and a field set.
    fn endpoint(&self, segments: &[&str], fields: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Api(format!("Invalid API base URL: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        url.query_pairs_mut()
            .append_pair("fields", &join_fields(fields))
            .append_pair(TOKEN_PARAM, &self.token);
        Ok(url)
    }

    /// Make a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", redact_token(&url));

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<GraphErrorResponse>(&text) {
                Ok(body) => body.error.message,
                Err(_) if text.is_empty() => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
                Err(_) => truncate(&text).to_string(),
            };
            return Err(Error::ApiStatus {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse response: {} - Response: {}",
                e,
                truncate(&text)
            ))
        })
    }

    /// List the first page of media owned by `owner` (a user id or `me`).
    pub async fn list_media(&self, owner: &str, fields: &[&str]) -> Result<Vec<MediaItem>> {
        let url = self.endpoint(&[owner, "media"], fields)?;
        let page: MediaListResponse = self.get(url).await?;

        if page.paging.as_ref().and_then(|p| p.next.as_ref()).is_some() {
            tracing::debug!("More media available beyond the first page, not following");
        }

        let mut items = Vec::with_capacity(page.data.len());
        for (position, entry) in page.data.into_iter().enumerate() {
            match serde_json::from_value::<MediaItem>(entry) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("Skipping malformed media entry #{}: {}", position, e),
            }
        }

        Ok(items)
    }

    /// Get a single media object by id.
    pub async fn get_media(&self, media_id: &str, fields: &[&str]) -> Result<MediaItem> {
        let url = self.endpoint(&[media_id], fields)?;
        self.get(url).await
    }
}

/// Render a URL for logs with the access token replaced.
pub fn redact_token(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == TOKEN_PARAM { "REDACTED".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_BODY_IN_ERROR) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
