//! Integration tests for share links and the public brain view.

mod common;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serial_test::serial;

use mindvault::backend::share::db::enable_sharing;

use common::auth_helpers::{create_test_user, send, test_router, TEST_PUBLIC_URL};
use common::database::TestDatabase;

/// Pull the opaque token back out of a composed share URL
fn token_from_share_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap()
}

#[tokio::test]
#[serial]
async fn enabling_twice_returns_the_same_token() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let router = test_router(db.pool().clone());
    let user = create_test_user(db.pool(), "alice", "secret1").await;

    let (status, first) = send(
        router.clone(),
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let first_link = first["shareLink"].as_str().unwrap().to_string();
    assert!(first_link.starts_with(&format!("{}/share/", TEST_PUBLIC_URL)));

    let (_, second) = send(
        router,
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": true})),
    )
    .await;
    assert_eq!(second["shareLink"].as_str().unwrap(), first_link);
    assert_eq!(db.count("share_links").await, 1);
}

#[tokio::test]
#[serial]
async fn disable_then_enable_mints_a_fresh_token() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let router = test_router(db.pool().clone());
    let user = create_test_user(db.pool(), "alice", "secret1").await;

    let (_, body) = send(
        router.clone(),
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": true})),
    )
    .await;
    let old_link = body["shareLink"].as_str().unwrap().to_string();

    let (status, body) = send(
        router.clone(),
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("shareLink").is_none());
    assert_eq!(db.count("share_links").await, 0);

    let (_, body) = send(
        router,
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": true})),
    )
    .await;
    assert_ne!(body["shareLink"].as_str().unwrap(), old_link);
}

#[tokio::test]
#[serial]
async fn disable_when_absent_is_not_an_error() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let router = test_router(db.pool().clone());
    let user = create_test_user(db.pool(), "alice", "secret1").await;

    let (status, _) = send(
        router,
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn wrong_typed_share_field_rejected() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let router = test_router(db.pool().clone());
    let user = create_test_user(db.pool(), "alice", "secret1").await;

    for body in [
        serde_json::json!({"share": "yes"}),
        serde_json::json!({"share": 1}),
        serde_json::json!({}),
    ] {
        let (status, response) = send(
            router.clone(),
            Method::POST,
            "/api/v1/brain/share",
            Some(&user.token),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["fields"][0]["field"], "share");
    }
}

#[tokio::test]
#[serial]
async fn brain_view_returns_exactly_the_owners_content() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let router = test_router(db.pool().clone());
    let alice = create_test_user(db.pool(), "alice", "secret1").await;
    let bob = create_test_user(db.pool(), "bob", "secret2").await;

    for (token, title) in [(&alice.token, "alices"), (&bob.token, "bobs")] {
        send(
            router.clone(),
            Method::POST,
            "/api/v1/content",
            Some(token),
            Some(serde_json::json!({
                "type": "link",
                "link": "https://example.com",
                "title": title,
                "tags": ["ref"]
            })),
        )
        .await;
    }

    let (_, body) = send(
        router.clone(),
        Method::POST,
        "/api/v1/brain/share",
        Some(&alice.token),
        Some(serde_json::json!({"share": true})),
    )
    .await;
    let token = token_from_share_url(body["shareLink"].as_str().unwrap()).to_string();

    // Anonymous fetch - no Authorization header.
    let (status, body) = send(
        router,
        Method::GET,
        &format!("/api/v1/brain/{}", token),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sharedBy"], "alice");

    let content = body["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["title"], "alices");
    assert_eq!(content[0]["tags"], serde_json::json!(["ref"]));
}

#[tokio::test]
#[serial]
async fn unknown_or_disabled_token_returns_not_found() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let router = test_router(db.pool().clone());
    let user = create_test_user(db.pool(), "alice", "secret1").await;

    // Never issued
    let (status, body) = send(
        router.clone(),
        Method::GET,
        "/api/v1/brain/0123456789abcdef0123456789abcdef",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "share link not found");

    // Issued, then disabled
    let (_, body) = send(
        router.clone(),
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": true})),
    )
    .await;
    let token = token_from_share_url(body["shareLink"].as_str().unwrap()).to_string();

    send(
        router.clone(),
        Method::POST,
        "/api/v1/brain/share",
        Some(&user.token),
        Some(serde_json::json!({"share": false})),
    )
    .await;

    let (status, _) = send(
        router,
        Method::GET,
        &format!("/api/v1/brain/{}", token),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn concurrent_enables_converge_on_one_link() {
    let Some(db) = TestDatabase::new().await else {
        eprintln!("skipping: no test database configured");
        return;
    };
    let pool = db.pool().clone();
    let user = create_test_user(db.pool(), "alice", "secret1").await;

    // Race several enables for the same user; the losers hit the unique
    // constraint on user_id and must re-select the winner's token.
    let (a, b, c) = tokio::join!(
        enable_sharing(&pool, user.id),
        enable_sharing(&pool, user.id),
        enable_sharing(&pool, user.id),
    );
    let a = a.unwrap();
    let b = b.unwrap();
    let c = c.unwrap();

    assert_eq!(a.token, b.token);
    assert_eq!(a.token, c.token);
    assert_eq!(db.count("share_links").await, 1);
}
