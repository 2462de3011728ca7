//! Media list fetching.

use crate::api::GraphApi;
use crate::export::outcome::FetchOutcome;
use crate::media::MediaItem;

/// Fetch the owner's media list and keep the first `limit` entries.
///
/// Order is whatever the API returned. A failed call is logged and returned
/// as [`FetchOutcome::Failed`].
pub async fn fetch_media_list(
    api: &GraphApi,
    owner: &str,
    fields: &[&str],
    limit: usize,
) -> FetchOutcome<Vec<MediaItem>> {
    match api.list_media(owner, fields).await {
        Ok(mut items) => {
            let returned = items.len();
            items.truncate(limit);
            tracing::info!("Media list returned {} items, keeping {}", returned, items.len());
            FetchOutcome::Fetched(items)
        }
        Err(e) => {
            tracing::error!("Failed to fetch media list: {}", e);
            FetchOutcome::Failed(e)
        }
    }
}
