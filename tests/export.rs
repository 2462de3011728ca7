use graph_media_export::{
    collect_document, save_document, Config, Error, ErrorPolicy, FetchMode, GraphApi,
};
use mockito::Matcher;
use serde_json::{json, Value};

fn config_for(server: &mockito::ServerGuard, mode: FetchMode, dir: &tempfile::TempDir) -> Config {
    let mut config = Config::default();
    config.account.access_token = "IGQWR-test-token".into();
    config.options.api_base = server.url();
    config.options.fetch_mode = mode;
    config.options.output_path = dir.path().join("output.json");
    config.options.show_progress = false;
    config
}

async fn export(config: &Config) -> Value {
    let api = GraphApi::from_config(config).unwrap();
    let (document, _) = collect_document(&api, config).await.unwrap();
    save_document(&document, &config.options.output_path)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&config.options.output_path).unwrap();
    serde_json::from_str(&written).unwrap()
}

#[tokio::test]
async fn detailed_export_leaves_failed_slot_empty() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/me/media")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("fields".into(), "id".into()),
            Matcher::UrlEncoded("access_token".into(), "IGQWR-test-token".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data": [{"id": "a"}, {"id": "b"}, {"id": "c"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/a")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": "a", "media_type": "IMAGE", "username": "jane"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/b")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    server
        .mock("GET", "/c")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": "c", "media_type": "VIDEO", "username": "jane"}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, FetchMode::Detailed, &dir);

    assert_eq!(
        export(&config).await,
        json!([
            [{ "id": "a", "media_type": "IMAGE", "username": "jane" }],
            [],
            [{ "id": "c", "media_type": "VIDEO", "username": "jane" }]
        ])
    );
}

#[tokio::test]
async fn flat_export_keeps_first_twenty_in_order() {
    let mut server = mockito::Server::new_async().await;
    let data: Vec<Value> = (0..30)
        .map(|i| {
            json!({
                "id": format!("{}", 900 - i),
                "caption": format!("post {}", i),
                "media_type": "IMAGE",
                "media_url": format!("https://cdn.example/{}.jpg", i),
                "username": "jane",
                "timestamp": "2024-03-01T10:00:00+0000"
            })
        })
        .collect();
    server
        .mock("GET", "/me/media")
        .match_query(Matcher::UrlEncoded(
            "fields".into(),
            "id,caption,media_type,media_url,username,timestamp".into(),
        ))
        .with_status(200)
        .with_body(json!({ "data": data }).to_string())
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, FetchMode::Flat, &dir);
    let written = export(&config).await;

    let groups = written.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    let items = groups[0].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0], data[0]);
    assert_eq!(items[19], data[19]);
}

#[tokio::test]
async fn failed_list_still_writes_and_overwrites() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/me/media")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error": {"message": "Invalid OAuth access token"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, FetchMode::Flat, &dir);
    std::fs::write(&config.options.output_path, r#"[[{"id": "stale"}]]"#).unwrap();

    assert_eq!(export(&config).await, json!([[]]));
}

#[tokio::test]
async fn strict_policy_writes_nothing() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/me/media")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error": {"message": "Invalid OAuth access token"}}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(&server, FetchMode::Detailed, &dir);
    config.options.on_error = ErrorPolicy::Abort;

    let api = GraphApi::from_config(&config).unwrap();
    let err = collect_document(&api, &config).await.unwrap_err();

    assert!(matches!(err, Error::ApiStatus { status: 400, .. }));
    assert!(!config.options.output_path.exists());
}

#[tokio::test]
async fn user_id_selects_media_owner() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/17841400000000000/media")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data": [{"id": "1"}]}"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = config_for(&server, FetchMode::Flat, &dir);
    config.account.user_id = Some("17841400000000000".into());

    assert_eq!(export(&config).await, json!([[{ "id": "1" }]]));
    mock.assert_async().await;
}

#[tokio::test]
async fn flat_export_writes_api_values_unchanged() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/me/media")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"data": [
                {"id": "1", "media_type": "REELS", "permalink": "https://instagram.com/p/1"},
                {"id": 2},
                {"id": "3", "media_type": "IMAGE"}
            ]}"#,
        )
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, FetchMode::Flat, &dir);

    assert_eq!(
        export(&config).await,
        json!([[
            { "id": "1", "media_type": "REELS", "permalink": "https://instagram.com/p/1" },
            { "id": "3", "media_type": "IMAGE" }
        ]])
    );
}
