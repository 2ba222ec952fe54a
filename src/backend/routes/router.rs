/**
 * Router Configuration
 *
 * Builds the Axum router. Protected routes carry the auth middleware as a
 * route layer, so a missing or invalid token is rejected before any handler
 * or store runs; public routes (signup, signin, shared brain view) bypass
 * it entirely.
 */

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::backend::auth::handlers::{signin, signup};
use crate::backend::content::handlers::{create_content, delete_content, list_content};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::share::handlers::{toggle_sharing, view_brain};

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - application state (pool, config, session keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/v1/content", post(create_content).get(list_content))
        .route("/api/v1/content/{id}", delete(delete_content))
        .route("/api/v1/brain/share", post(toggle_sharing))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    let public = Router::new()
        .route("/api/v1/signup", post(signup))
        .route("/api/v1/signin", post(signin))
        .route("/api/v1/brain/{token}", get(view_brain));

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
