//! Fetch pipeline for both modes.

use indicatif::ProgressBar;

use crate::api::GraphApi;
use crate::config::{Config, ErrorPolicy, FetchMode};
use crate::error::Result;
use crate::export::detail::fetch_media_details;
use crate::export::document::OutputDocument;
use crate::export::list::fetch_media_list;
use crate::export::outcome::FetchOutcome;
use crate::export::state::RunSummary;
use crate::media::{MediaItem, FLAT_LIST_FIELDS, ID_ONLY_FIELDS};
use crate::output::create_item_bar;

/// Fetch media according to the configured mode and build the document.
///
/// Nothing is written here. Under [`ErrorPolicy::Abort`] the first failed call
/// is returned as an error.
pub async fn collect_document(
    api: &GraphApi,
    config: &Config,
) -> Result<(OutputDocument, RunSummary)> {
    let mut summary = RunSummary::new(config.options.fetch_mode);

    let document = match config.options.fetch_mode {
        FetchMode::Flat => collect_flat(api, config, &mut summary).await?,
        FetchMode::Detailed => collect_detailed(api, config, &mut summary).await?,
    };

    Ok((document, summary))
}

/// One list call with every field.
async fn collect_flat(
    api: &GraphApi,
    config: &Config,
    summary: &mut RunSummary,
) -> Result<OutputDocument> {
    let outcome = fetch_media_list(
        api,
        config.media_owner(),
        FLAT_LIST_FIELDS,
        config.options.limit,
    )
    .await;
    let items = settle_list(outcome, config.options.on_error, summary)?;

    for item in &items {
        summary.observe_item(item);
    }

    Ok(OutputDocument::flat(items))
}

/// A list call for ids, then a detail call per id.
async fn collect_detailed(
    api: &GraphApi,
    config: &Config,
    summary: &mut RunSummary,
) -> Result<OutputDocument> {
    let outcome = fetch_media_list(
        api,
        config.media_owner(),
        ID_ONLY_FIELDS,
        config.options.limit,
    )
    .await;
    let ids: Vec<String> = settle_list(outcome, config.options.on_error, summary)?
        .into_iter()
        .map(|item| item.id)
        .collect();

    tracing::info!("Fetching details for {} media items", ids.len());

    let bar = if config.options.show_progress {
        create_item_bar(ids.len() as u64, "Fetching details")
    } else {
        ProgressBar::hidden()
    };

    let outcomes = fetch_media_details(
        api,
        &ids,
        config.options.detail_concurrency,
        config.options.on_error,
        &bar,
    )
    .await;
    bar.finish_and_clear();
    let outcomes = outcomes?;

    for (id, outcome) in ids.iter().zip(&outcomes) {
        match outcome {
            FetchOutcome::Fetched(item) => {
                summary.increment_detail();
                summary.observe_item(item);
            }
            FetchOutcome::Failed(e) => summary.mark_detail_failed(id.clone(), e.to_string()),
        }
    }

    Ok(OutputDocument::detailed(outcomes))
}

/// Apply the error policy to the list call.
fn settle_list(
    outcome: FetchOutcome<Vec<MediaItem>>,
    policy: ErrorPolicy,
    summary: &mut RunSummary,
) -> Result<Vec<MediaItem>> {
    let items = match outcome {
        FetchOutcome::Fetched(items) => items,
        FetchOutcome::Failed(e) if policy == ErrorPolicy::Abort => return Err(e),
        FetchOutcome::Failed(e) => {
            summary.mark_list_failed(e.to_string());
            Vec::new()
        }
    };

    summary.listed = items.len();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockito::Matcher;
    use serde_json::json;

    fn config_for(server: &mockito::ServerGuard, mode: FetchMode) -> Config {
        let mut config = Config::default();
        config.account.access_token = "token".into();
        config.options.api_base = server.url();
        config.options.fetch_mode = mode;
        config.options.show_progress = false;
        config
    }

    #[tokio::test]
    async fn test_flat_list_failure_gives_empty_group() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/me/media")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let config = config_for(&server, FetchMode::Flat);
        let api = GraphApi::from_config(&config).unwrap();
        let (doc, summary) = collect_document(&api, &config).await.unwrap();

        assert_eq!(serde_json::to_value(&doc).unwrap(), json!([[]]));
        assert!(summary.list_error.is_some());
        assert_eq!(summary.failed_calls(), 1);
    }

    #[tokio::test]
    async fn test_detailed_list_failure_gives_empty_document() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/me/media")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let config = config_for(&server, FetchMode::Detailed);
        let api = GraphApi::from_config(&config).unwrap();
        let (doc, _) = collect_document(&api, &config).await.unwrap();

        assert_eq!(serde_json::to_value(&doc).unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_abort_policy_returns_list_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/me/media")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": {"message": "Invalid OAuth access token"}}"#)
            .create_async()
            .await;

        let mut config = config_for(&server, FetchMode::Flat);
        config.options.on_error = ErrorPolicy::Abort;
        let api = GraphApi::from_config(&config).unwrap();
        let err = collect_document(&api, &config).await.unwrap_err();

        assert!(matches!(err, Error::ApiStatus { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_detailed_truncates_before_detail_calls() {
        let mut server = mockito::Server::new_async().await;
        let data: Vec<_> = (0..5).map(|i| json!({ "id": format!("id{}", i) })).collect();
        server
            .mock("GET", "/me/media")
            .match_query(Matcher::UrlEncoded("fields".into(), "id".into()))
            .with_status(200)
            .with_body(json!({ "data": data }).to_string())
            .create_async()
            .await;

        let detail = server
            .mock("GET", Matcher::Regex(r"^/id\d$".to_string()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"id": "any", "media_type": "VIDEO"}"#)
            .expect(2)
            .create_async()
            .await;

        let mut config = config_for(&server, FetchMode::Detailed);
        config.options.limit = 2;
        let api = GraphApi::from_config(&config).unwrap();
        let (doc, summary) = collect_document(&api, &config).await.unwrap();

        detail.assert_async().await;
        assert_eq!(serde_json::to_value(&doc).unwrap().as_array().unwrap().len(), 2);
        assert_eq!(summary.listed, 2);
        assert_eq!(summary.details_fetched, 2);
    }
}
