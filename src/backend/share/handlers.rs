/**
 * Share Handlers
 *
 * - POST /api/v1/brain/share  (protected) - turn sharing on or off
 * - GET  /api/v1/brain/{token} (public)   - fetch a shared collection
 *
 * The toggle body is checked by hand: `share` must be a JSON boolean, and a
 * missing or wrong-typed field is a 400 naming the field. Enabling twice
 * returns the same token; disabling when no link exists is not an error.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::content::db::list_by_owner;
use crate::backend::content::types::ContentItem;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::share::db::{disable_sharing, enable_sharing, resolve_share_token};

/// Response for POST /api/v1/brain/share
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareResponse {
    pub message: String,
    /// Full public URL, present only when sharing was enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_link: Option<String>,
}

/// Response for GET /api/v1/brain/{token}
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainView {
    /// Username of the collection's owner
    pub shared_by: String,
    pub content: Vec<ContentItem>,
}

/// Toggle sharing handler
///
/// # Errors
///
/// * `400 Bad Request` - `share` missing or not a boolean
/// * `500 Internal Server Error` - store failure
pub async fn toggle_sharing(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ShareResponse>, ApiError> {
    let share = body
        .get("share")
        .and_then(|v| v.as_bool())
        .ok_or_else(|| ApiError::invalid_field("share", "must be a boolean"))?;

    if share {
        let link = enable_sharing(&state.pool, user.user_id).await?;
        tracing::info!("Sharing enabled for user {}", user.user_id);

        Ok(Json(ShareResponse {
            message: "Shared Link".to_string(),
            share_link: Some(state.config.share_url(&link.token)),
        }))
    } else {
        disable_sharing(&state.pool, user.user_id).await?;
        tracing::info!("Sharing disabled for user {}", user.user_id);

        Ok(Json(ShareResponse {
            message: "Brain sharing disabled".to_string(),
            share_link: None,
        }))
    }
}

/// Public brain view handler
///
/// Resolves the opaque token to its owner and returns exactly that user's
/// current content set. No authentication required.
///
/// # Errors
///
/// * `404 Not Found` - token was never issued or sharing has been disabled
pub async fn view_brain(
    State(pool): State<PgPool>,
    Path(token): Path<String>,
) -> Result<Json<BrainView>, ApiError> {
    let (owner_id, username) = resolve_share_token(&pool, &token)
        .await?
        .ok_or_else(|| ApiError::NotFound("share link not found".to_string()))?;

    let content = list_by_owner(&pool, owner_id).await?;

    Ok(Json(BrainView {
        shared_by: username,
        content,
    }))
}
