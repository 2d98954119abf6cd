//! API integration tests
//!
//! Each test serves the full application on a local port, backed by the
//! seeded in-memory repository, so no database is needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Talk Tests
// ============================================================================

#[tokio::test]
async fn test_get_talk() {
    let server = TestServer::start().await.unwrap();
    let response = server.get(&format!("/api/events/talk/{TALK_ID}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["id"], TALK_ID);
    assert_eq!(body["title"], "Scaling Python");
    assert_eq!(body["event_type"], "talk");
    assert_eq!(body["language"], "ENEN");
    assert_eq!(body["python_level"], "INTERMEDIATE");
    assert_eq!(body["abstract"], "Scaling Python in brief.");
    assert_eq!(body["begin_time"], "2026-09-05T01:30:00Z");
    assert_eq!(body["location"], "2-all");
    assert_eq!(body["slide_link"], "https://slides.example.com/deck");
    assert_eq!(body["slido_embed_link"], "");
    assert!(body.get("proposal").is_none());

    let speakers = body["speakers"].as_array().unwrap();
    assert_eq!(speakers.len(), 1);
    let keys: Vec<&str> = speakers[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        [
            "thumbnail_url",
            "name",
            "github_profile_url",
            "twitter_profile_url",
            "facebook_profile_url",
            "bio",
        ]
    );
    assert_eq!(speakers[0]["name"], "Ada");
    assert_eq!(speakers[0]["bio"], "Ada writes Python.");
    assert_eq!(speakers[0]["github_profile_url"], "https://github.com/ada");
    assert_eq!(
        speakers[0]["thumbnail_url"],
        format!("{}/media/avatars/ada.png", server.base_url())
    );
}

#[tokio::test]
async fn test_get_talk_escapes_photo_url() {
    let mut repo = InMemoryEventRepository::seeded();
    if let Some(proposal) = repo.talks[0].proposal.as_mut() {
        proposal.speakers = vec![speaker(7, "Ming", "avatars/王 小明.png")];
    }
    let server = TestServer::start_with(Arc::new(repo), test_config())
        .await
        .unwrap();

    let response = server.get(&format!("/api/events/talk/{TALK_ID}")).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body["speakers"][0]["thumbnail_url"],
        format!(
            "{}/media/avatars/%E7%8E%8B%20%E5%B0%8F%E6%98%8E.png",
            server.base_url()
        )
    );
}

#[tokio::test]
async fn test_get_talk_key_order() {
    let server = TestServer::start().await.unwrap();
    let response = server.get(&format!("/api/events/talk/{TALK_ID}")).await.unwrap();
    let body: serde_json::Map<String, Value> =
        assert_json(response, StatusCode::OK).await.unwrap();

    let keys: Vec<&str> = body.keys().map(String::as_str).collect();
    assert_eq!(&keys[..5], ["id", "begin_time", "end_time", "is_remote", "location"]);
    assert_eq!(keys.last(), Some(&"event_type"));
}

#[tokio::test]
async fn test_get_unknown_talk() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/talk/999").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TALK");
}

#[tokio::test]
async fn test_get_talk_with_malformed_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/talk/five").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
    assert_eq!(body.error.message, "Invalid path parameter: Invalid event id format");
}

#[tokio::test]
async fn test_tutorial_id_is_not_a_talk() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/api/events/talk/{TUTORIAL_ID}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_talks() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/talks").await.unwrap();
    let items: Vec<ListItem> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, TALK_ID);
    assert_eq!(items[0].title, "Scaling Python");
    assert_eq!(items[0].category, "PRAC");
    assert_eq!(items[0].event_type, "talk");
    assert_eq!(items[0].speakers[0].name, "Ada");
}

#[tokio::test]
async fn test_list_talks_omits_speaker_details() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/talks").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let item = body[0].as_object().unwrap();
    assert!(!item.contains_key("abstract"));
    assert!(!item.contains_key("location"));
    let speaker = body[0]["speakers"][0].as_object().unwrap();
    assert_eq!(speaker.len(), 2);
}

// ============================================================================
// Tutorial Tests
// ============================================================================

#[tokio::test]
async fn test_get_tutorial() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/api/events/tutorial/{TUTORIAL_ID}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["id"], TUTORIAL_ID);
    assert_eq!(body["event_type"], "tutorial");
    assert_eq!(body["registration_link"], "https://kktix.example.com/t/8");
    assert_eq!(body["is_remote"], true);
    assert_eq!(body["begin_time"], Value::Null);
    assert!(body.get("proposal").is_none());

    let speakers = body["speakers"].as_array().unwrap();
    assert_eq!(speakers.len(), 2);
    assert_eq!(speakers[0]["name"], "Grace");
    assert_eq!(speakers[1]["name"], "Linus");
    assert_eq!(
        speakers[1]["thumbnail_url"],
        format!("{}/static/images/default_head.png", server.base_url())
    );
}

#[tokio::test]
async fn test_get_unknown_tutorial() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/api/events/tutorial/{TALK_ID}"))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TUTORIAL");
}

#[tokio::test]
async fn test_list_tutorials() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/tutorials").await.unwrap();
    let items: Vec<ListItem> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].event_type, "tutorial");
    assert_eq!(items[0].speakers.len(), 2);
}

// ============================================================================
// Sponsored Event Tests
// ============================================================================

#[tokio::test]
async fn test_get_sponsored_event() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get(&format!("/api/events/sponsored/{SPONSORED_ID}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["event_type"], "sponsored");
    assert_eq!(body["is_remote"], "remote");
    assert_eq!(body["language"], "ZHZH");
    assert_eq!(body["speakers"][0]["name"], "Acme");
    assert_eq!(body["speakers"][0]["bio"], "Acme writes Python.");
}

#[tokio::test]
async fn test_get_unknown_sponsored_event() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/sponsored/77").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_SPONSORED_EVENT");
}

#[tokio::test]
async fn test_list_sponsored_events() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/sponsored").await.unwrap();
    let items: Vec<ListItem> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, SPONSORED_ID);
    assert_eq!(items[0].event_type, "sponsored");
}

// ============================================================================
// Keynote Tests
// ============================================================================

#[tokio::test]
async fn test_list_keynotes() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/events/keynotes").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let keynote = &body[0];
    assert_eq!(keynote["speaker"]["name_en_us"], "Lin");
    assert_eq!(keynote["speaker"]["photo"], "/media/keynotes/lin.jpg");
    assert_eq!(keynote["session"]["title_en_us"], "Opening");
    assert_eq!(keynote["social_item"]["linkedin"], "");
    assert_eq!(keynote["youtube_id"], "dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_keynote_without_photo_is_server_error() {
    let mut repo = InMemoryEventRepository::seeded();
    repo.keynotes[0].speaker_photo = None;
    let server = TestServer::start_with(Arc::new(repo), test_config())
        .await
        .unwrap();

    let response = server.get("/api/events/keynotes").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body.error.code, "MISSING_ATTRIBUTE");
    assert_eq!(body.error.message, "Internal Server Error");
}

// ============================================================================
// Proxy Header Tests
// ============================================================================

#[tokio::test]
async fn test_forwarded_host_when_trusted() {
    let mut config = test_config();
    config.api.trust_proxy_headers = true;
    let server = TestServer::start_with(Arc::new(InMemoryEventRepository::seeded()), config)
        .await
        .unwrap();

    let response = server
        .get_forwarded("/api/events/talks", "tw.pycon.org", "https")
        .await
        .unwrap();
    let items: Vec<ListItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        items[0].speakers[0].thumbnail_url,
        "https://tw.pycon.org/media/avatars/ada.png"
    );
}

#[tokio::test]
async fn test_forwarded_host_ignored_by_default() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get_forwarded("/api/events/talks", "evil.example.com", "https")
        .await
        .unwrap();
    let items: Vec<ListItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(items[0].speakers[0]
        .thumbnail_url
        .starts_with(&server.base_url()));
}
