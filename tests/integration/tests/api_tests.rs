//! API Integration Tests
//!
//! Each test boots the server against its own mock Discord API.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use httpmock::prelude::*;
use integration_tests::{
    assert_json, assert_status, bot_json, member_json, presence_json, user_json, ErrorBody,
    RosterBody, TestServer, TEST_TOKEN,
};
use reqwest::StatusCode;
use roster_core::{Snowflake, UserStatus};
use roster_service::EventKind;
use serde_json::{json, Value};

const AUTH: &str = "Authorization";

fn bot_auth() -> String {
    format!("Bot {TEST_TOKEN}")
}

/// Users 1 (alice, online), 2 (bot) and 3 (carol, no presence)
fn mock_fallback_roster(upstream: &MockServer) {
    upstream.mock(|when, then| {
        when.method(GET).path("/users/1").header(AUTH, bot_auth());
        then.status(200).json_body(user_json(1, "alice"));
    });
    upstream.mock(|when, then| {
        when.method(GET).path("/users/2");
        then.status(200).json_body(bot_json(2, "helper"));
    });
    upstream.mock(|when, then| {
        when.method(GET).path("/users/3");
        then.status(200).json_body(user_json(3, "carol"));
    });
    upstream.mock(|when, then| {
        when.method(GET).path("/users/1/presence");
        then.status(200).json_body(presence_json(1, "online"));
    });
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_reports_caches() {
    let server = TestServer::start().await.expect("Failed to start server");
    mock_fallback_roster(&server.upstream);

    server.get("/api/v1/roster").await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["caches"]["users"], 3);
    assert_eq!(body["roster_loads"], 1);
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");
    mock_fallback_roster(&server.upstream);

    let response = server.get("/api/v1/roster").await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Fallback Roster Tests
// ============================================================================

#[tokio::test]
async fn test_fallback_roster() {
    let server = TestServer::start().await.expect("Failed to start server");
    mock_fallback_roster(&server.upstream);

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.usernames(), vec!["alice", "carol"]);
    assert_eq!(body.records[0].status, UserStatus::Online);
    assert_eq!(body.records[1].status, UserStatus::Offline);
    assert_eq!(
        body.records[0].avatar_url.as_deref(),
        Some("https://cdn.discordapp.com/avatars/1/hash1.png")
    );

    assert_eq!(body.events.len(), 1 + 2 * 3);
    assert_eq!(body.events[0].message, "Starting to fetch 3 users...");
    assert_eq!(body.events[1].kind, EventKind::Progress);
    assert_eq!(body.events[2].message, "✓ Loaded alice");
    assert!(body.events[2].user.is_some());

    assert_eq!(body.summary.total, 2);
    assert_eq!(body.summary.online, 1);
    assert!(!body.summary.retry_suggested);
    assert_eq!(body.progress.percent, 100);
    assert_eq!(body.guild_id, None);
    assert!(!body.superseded);
    assert!(body.pagination.is_none());
}

#[tokio::test]
async fn test_second_load_uses_cache() {
    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.upstream.mock(|when, then| {
        when.method(GET).path("/users/1");
        then.status(200).json_body(user_json(1, "alice"));
    });

    server.get("/api/v1/roster").await.unwrap();
    let response = server.get("/api/v1/roster").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(alice.hits(), 1);
    assert_eq!(body.generation, 2);
    assert_eq!(body.events[1].message, "✓ Loaded from cache: alice");
}

#[tokio::test]
async fn test_failed_user_is_reported_and_skipped() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.upstream.mock(|when, then| {
        when.method(GET).path("/users/1");
        then.status(200).json_body(user_json(1, "alice"));
    });

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.usernames(), vec!["alice"]);
    let errors: Vec<_> = body
        .events
        .iter()
        .filter(|e| e.kind == EventKind::Error)
        .collect();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.starts_with("✗ Error loading user 2"));
    assert!(!body.summary.retry_suggested);
}

#[tokio::test]
async fn test_rejected_token_is_reported_per_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.upstream.mock(|when, then| {
        when.method(GET).path("/users/1");
        then.status(401).json_body(json!({"message": "401: Unauthorized", "code": 0}));
    });
    server.upstream.mock(|when, then| {
        when.method(GET).path("/users/2");
        then.status(200).json_body(user_json(2, "bob"));
    });

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.usernames(), vec!["bob"]);
    assert_eq!(body.events.len(), 1 + 2 * 3);
    assert_eq!(body.events[2].kind, EventKind::Error);
    assert_eq!(
        body.events[2].message,
        "✗ Error loading user 1: Unauthorized: bot token was rejected"
    );
    assert_eq!(body.events[4].message, "✓ Loaded bob");
    assert!(!body.summary.retry_suggested);
}

// ============================================================================
// Query Tests
// ============================================================================

#[tokio::test]
async fn test_search_filters_records() {
    let server = TestServer::start().await.expect("Failed to start server");
    mock_fallback_roster(&server.upstream);

    let response = server.get("/api/v1/roster?q=CAR").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.usernames(), vec!["carol"]);

    let response = server.get("/api/v1/roster?q=zz_no_match").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.records.is_empty());

    let response = server.get("/api/v1/roster?q=").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.records.len(), 2);
}

#[tokio::test]
async fn test_load_more_pages() {
    let server = TestServer::start().await.expect("Failed to start server");
    mock_fallback_roster(&server.upstream);

    let response = server.get("/api/v1/roster?page=1&per_page=1").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.usernames(), vec!["alice"]);
    let page = body.pagination.expect("pagination");
    assert_eq!(page.total, 2);
    assert!(page.has_more);

    let response = server.get("/api/v1/roster?page=2&per_page=1").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.records.len(), 2);
    assert!(!body.pagination.expect("pagination").has_more);
}

#[tokio::test]
async fn test_invalid_query_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/roster?per_page=0").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());

    let response = server.get("/api/v1/roster?guild_id=abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let long = "x".repeat(101);
    let response = server.get(&format!("/api/v1/roster?q={long}")).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/api/v1/roster?page=two").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
    assert!(!body.error.message.is_empty());
}

// ============================================================================
// Guild Roster Tests
// ============================================================================

#[tokio::test]
async fn test_guild_roster_with_failing_presences() {
    let server = TestServer::start().await.expect("Failed to start server");
    let members = server.upstream.mock(|when, then| {
        when.method(GET)
            .path("/guilds/500/members")
            .query_param("limit", "100")
            .header(AUTH, bot_auth());
        then.status(200).json_body(json!([
            member_json(user_json(1, "alice"), &[]),
            member_json(bot_json(2, "helper"), &[]),
            member_json(user_json(3, "carol"), &[]),
        ]));
    });
    server.upstream.mock(|when, then| {
        when.method(GET).path("/guilds/500/presences");
        then.status(500);
    });

    let response = server.get("/api/v1/roster?guild_id=500").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    members.assert();
    assert_eq!(body.guild_id, Some(Snowflake::new(500)));
    assert_eq!(body.usernames(), vec!["alice", "carol"]);
    assert!(body.records.iter().all(|r| r.status == UserStatus::Offline));
    assert!(body.events.is_empty());
}

#[tokio::test]
async fn test_default_guild_roster_with_badges() {
    let server = TestServer::start_with(&[
        ("DISCORD_GUILD_ID", "500"),
        ("ROSTER_CUSTOM_BADGES", "900:admin"),
    ])
    .await
    .expect("Failed to start server");

    let mut dave = user_json(4, "dave");
    dave["public_flags"] = json!(1 << 22);
    server.upstream.mock(|when, then| {
        when.method(GET).path("/guilds/500/members");
        then.status(200).json_body(json!([
            member_json(user_json(1, "alice"), &[]),
            member_json(dave, &["900", "901"]),
        ]));
    });
    server.upstream.mock(|when, then| {
        when.method(GET).path("/guilds/500/presences");
        then.status(200).json_body(json!([
            presence_json(1, "idle"),
            presence_json(4, "online"),
        ]));
    });

    let response = server.get("/api/v1/roster").await.unwrap();
    let body: RosterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.guild_id, Some(Snowflake::new(500)));
    // grouped: online before idle
    assert_eq!(body.usernames(), vec!["dave", "alice"]);
    assert_eq!(body.records[0].badges, vec!["active_developer", "admin"]);
    assert_eq!(body.records[1].status, UserStatus::Idle);
    assert_eq!(body.summary.online, 2);
}
