//! Authentication and HTTP helpers for the integration tests.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use mindvault::backend::auth::sessions::{create_token, SessionKeys};
use mindvault::backend::auth::users::create_user;
use mindvault::backend::routes::create_router;
use mindvault::backend::server::config::ServerConfig;
use mindvault::backend::server::state::AppState;

/// Signing secret shared by the test router and token helpers
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Public base URL the test config composes share links from
pub const TEST_PUBLIC_URL: &str = "http://localhost:3000";

/// Build an `AppState` backed by the test pool
pub fn test_state(pool: PgPool) -> AppState {
    AppState::new(
        pool,
        ServerConfig {
            database_url: String::new(),
            jwt_secret: TEST_JWT_SECRET.to_string(),
            public_url: TEST_PUBLIC_URL.to_string(),
            port: 0,
        },
    )
}

/// Build the full application router over the test pool
pub fn test_router(pool: PgPool) -> Router {
    create_router(test_state(pool))
}

/// A user created directly in the store, with a valid session token
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub token: String,
}

/// Create a user row and issue a token for it, bypassing the HTTP layer
pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> TestUser {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("bcrypt hash");
    let user = create_user(pool, username, &password_hash)
        .await
        .expect("create test user");

    let keys = SessionKeys::from_secret(TEST_JWT_SECRET);
    let token = create_token(&keys, user.id).expect("create test token");

    TestUser {
        id: user.id,
        username: user.username,
        token,
    }
}

/// Send one request through the router, returning status and parsed body
pub async fn send(
    router: Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(path);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.expect("router call failed");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
