//! API response type definitions.

use serde::Deserialize;
use serde_json::Value;

/// Response of the `/{owner}/media` edge.
///
/// Entries stay raw so one malformed entry can be skipped without losing
/// the rest of the page.
#[derive(Debug, Deserialize)]
pub struct MediaListResponse {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Paging block. Only the first page is ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct Paging {
    pub next: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct GraphErrorResponse {
    pub error: GraphError,
}

/// Graph API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphError {
    pub message: String,
}
