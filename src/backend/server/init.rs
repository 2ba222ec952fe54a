/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server:
 * database connection, state creation, and route configuration.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Initialization Steps
///
/// 1. Connect to PostgreSQL and run migrations
/// 2. Build `AppState` (pool, configuration, session keys)
/// 3. Configure all routes and middleware
///
/// # Errors
///
/// Fails if the database cannot be reached or migrations fail. The server
/// never starts without its store.
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing Mind Vault backend");

    let pool = connect_database(&config).await?;
    let app_state = AppState::new(pool, config);

    tracing::info!("Application state initialized");

    Ok(create_router(app_state))
}
