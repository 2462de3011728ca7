//! Media item representation.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type of media content as reported by the Graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    CarouselAlbum,
    Other,
}

impl MediaType {
    /// Classify a raw `media_type` value.
    pub fn from_api(raw: &str) -> Self {
        match raw {
            "IMAGE" => MediaType::Image,
            "VIDEO" => MediaType::Video,
            "CAROUSEL_ALBUM" => MediaType::CarouselAlbum,
            _ => MediaType::Other,
        }
    }
}

/// One media object owned by the account.
///
/// Only `id` is guaranteed; the other fields are present when they were
/// requested. Values are kept exactly as the API sent them, including fields
/// this crate does not model, and absent fields are left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Opaque media id.
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Raw type string, e.g. `IMAGE` or `CAROUSEL_ALBUM`. See [`MediaItem::kind`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// ISO-8601 creation time, e.g. `2024-03-01T10:00:00+0000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Any other fields returned by the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MediaItem {
    /// A bare item holding only its id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            caption: None,
            media_type: None,
            media_url: None,
            username: None,
            timestamp: None,
            extra: Map::new(),
        }
    }

    /// Classified media type, if one was returned.
    pub fn kind(&self) -> Option<MediaType> {
        self.media_type.as_deref().map(MediaType::from_api)
    }

    /// Parse the creation timestamp.
    ///
    /// The Graph API uses `+0000` offsets without a colon, which RFC 3339
    /// parsing rejects, so both forms are tried.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
    }
}
