//! Per-item detail fetching.

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::api::GraphApi;
use crate::config::ErrorPolicy;
use crate::error::Result;
use crate::export::outcome::FetchOutcome;
use crate::media::{MediaItem, DETAIL_FIELDS};

/// Fetch details for each id, one detail call per id.
///
/// With `concurrency == 1` calls run strictly one after another. Larger values
/// keep at most that many requests in flight. Either way the returned vector
/// follows the order of `ids`, and a failure for one id does not stop later
/// ids under [`ErrorPolicy::Continue`]. Under [`ErrorPolicy::Abort`] the first
/// failure is returned and outstanding requests are dropped.
pub async fn fetch_media_details(
    api: &GraphApi,
    ids: &[String],
    concurrency: usize,
    policy: ErrorPolicy,
    progress: &ProgressBar,
) -> Result<Vec<FetchOutcome<MediaItem>>> {
    let mut outcomes = Vec::with_capacity(ids.len());

    let mut results = stream::iter(ids)
        .map(|id| async move {
            let result = api.get_media(id, DETAIL_FIELDS).await;
            (id, result)
        })
        .buffered(concurrency.max(1));

    while let Some((id, result)) = results.next().await {
        progress.inc(1);

        match result {
            Ok(item) => {
                tracing::debug!("Fetched details for media {}", id);
                outcomes.push(FetchOutcome::Fetched(item));
            }
            Err(e) => {
                tracing::error!("Failed to fetch media {}: {}", id, e);
                if policy == ErrorPolicy::Abort {
                    return Err(e);
                }
                outcomes.push(FetchOutcome::Failed(e));
            }
        }
    }

    Ok(outcomes)
}
