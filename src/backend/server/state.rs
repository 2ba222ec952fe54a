/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * `FromRef` so store-only handlers can extract `State<PgPool>` directly.
 *
 * # Thread Safety
 *
 * All state is read-only after startup or safe for concurrent use:
 * - `PgPool` is internally synchronized and can be cloned freely
 * - `ServerConfig` and `SessionKeys` are immutable behind `Arc`
 *
 * There is no other shared mutable state; every request is handled
 * independently against the database.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `pool` - PostgreSQL connection pool
/// * `config` - process-wide configuration (public URL, port)
/// * `session_keys` - JWT signing/verification keys, built once at startup
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,

    /// Server configuration, immutable after startup
    pub config: Arc<ServerConfig>,

    /// Session token signing and verification keys
    pub session_keys: Arc<SessionKeys>,
}

impl AppState {
    /// Build application state from its parts
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        let session_keys = Arc::new(SessionKeys::from_secret(&config.jwt_secret));
        Self {
            pool,
            config: Arc::new(config),
            session_keys,
        }
    }
}

/// Allow handlers that only touch the store to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
