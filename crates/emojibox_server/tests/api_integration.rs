//! Integration tests for the EmojiBox HTTP API.

mod support;

use axum::http::StatusCode;
use emojibox_server::{Config, EmojiRegistry, SYSTEM_AUTHOR};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use support::{setup_test_server, test_config, test_server_for_config, test_server_for_registry};

async fn submit(
    server: &axum_test::TestServer,
    emoji: &str,
    source: &str,
) -> axum_test::TestResponse {
    server
        .post("/emoji")
        .json(&json!({ "emoji": emoji, "source": source }))
        .await
}

fn assert_submit_error(response: &axum_test::TestResponse, code: u64, fragment: &str) {
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], code);
    let description = body["description"].as_str().expect("description");
    assert!(
        description.contains(fragment),
        "description {:?} should contain {:?}",
        description,
        fragment
    );
}

#[tokio::test]
async fn test_seeded_pick_returns_system_emoji() {
    let (server, _registry) = setup_test_server();
    let seeded: HashSet<&str> = ["🐱", "😍", "🍎"].into_iter().collect();

    for _ in 0..20 {
        let response = server.get("/emoji").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        let glyph = body["emoji"].as_str().expect("emoji");
        assert!(seeded.contains(glyph), "unexpected glyph {}", glyph);
        assert_eq!(body["source"], SYSTEM_AUTHOR);
    }
}

#[tokio::test]
async fn test_submit_then_duplicate_names_first_source() {
    let (server, registry) = setup_test_server();

    let created = submit(&server, "🎉", "alice").await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    assert!(created.text().is_empty());

    let duplicate = submit(&server, "🎉", "bob").await;
    assert_submit_error(&duplicate, 1, "alice");
    assert_eq!(registry.author_of("🎉").as_deref(), Some("alice"));
    assert_eq!(registry.len(), 4);
}

#[tokio::test]
async fn test_submit_validation_codes() {
    let (server, registry) = setup_test_server();
    let cases = [
        ("", 0, "No emoji :("),
        ("ab", 2, "more than one emoji"),
        ("x", 3, "not an emoji"),
        ("🐱", 1, SYSTEM_AUTHOR),
    ];

    for (emoji, code, fragment) in cases {
        let response = submit(&server, emoji, "tester").await;
        assert_submit_error(&response, code, fragment);
    }
    assert_eq!(registry.len(), 3);
}

#[tokio::test]
async fn test_pick_on_empty_registry_returns_bad_request() {
    let server = test_server_for_registry(Arc::new(EmojiRegistry::empty()));

    let response = server.get("/emoji").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({ "code": 0, "description": "No emojis on server :(" }));
}

#[tokio::test]
async fn test_submitted_emoji_is_eventually_picked() {
    let server = test_server_for_registry(Arc::new(EmojiRegistry::empty()));

    let created = submit(&server, "🦀", "ferris").await;
    assert_eq!(created.status_code(), StatusCode::CREATED);

    let response = server.get("/emoji").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "emoji": "🦀", "source": "ferris" }));
}

#[tokio::test]
async fn test_concurrent_duplicate_submissions_accept_one() {
    let (server, registry) = setup_test_server();

    let (first, second, third) = tokio::join!(
        submit(&server, "🚀", "one"),
        submit(&server, "🚀", "two"),
        submit(&server, "🚀", "three"),
    );

    let created = [&first, &second, &third]
        .iter()
        .filter(|response| response.status_code() == StatusCode::CREATED)
        .count();
    assert_eq!(created, 1);
    assert!(registry.author_of("🚀").is_some());
    assert_eq!(registry.len(), 4);
}

#[tokio::test]
async fn test_health_reports_registry_size() {
    let (server, _registry) = setup_test_server();

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": "ok", "emojis": 3 }));
}

#[tokio::test]
async fn test_security_headers_applied() {
    let (server, _registry) = setup_test_server();

    let response = server.get("/health").await;
    response.assert_header("x-content-type-options", "nosniff");
    response.assert_header("x-frame-options", "DENY");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let (server, registry) = setup_test_server();

    let response = server.post("/emoji").json(&json!({ "emoji": "🎈" })).await;
    assert!(response.status_code().is_client_error());
    assert_eq!(registry.len(), 3);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let registry = Arc::new(EmojiRegistry::default());
    let config = Config {
        max_body_size: 64,
        ..test_config()
    };
    let server = test_server_for_config(config, registry.clone());

    let response = submit(&server, "🎈", &"x".repeat(256)).await;
    assert!(
        matches!(
            response.status_code(),
            StatusCode::BAD_REQUEST | StatusCode::PAYLOAD_TOO_LARGE
        ),
        "expected BAD_REQUEST or PAYLOAD_TOO_LARGE, got {}",
        response.status_code()
    );
    assert_eq!(registry.len(), 3);
    assert!(registry.author_of("🎈").is_none());

    let accepted = submit(&server, "🎈", "small").await;
    assert_eq!(accepted.status_code(), StatusCode::CREATED);
}
