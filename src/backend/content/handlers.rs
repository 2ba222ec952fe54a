/**
 * Content Handlers
 *
 * HTTP handlers for the protected content endpoints:
 *
 * - POST   /api/v1/content       - create a content record
 * - GET    /api/v1/content       - list the caller's content
 * - DELETE /api/v1/content/{id}  - delete one of the caller's records
 *
 * All three sit behind the auth middleware; validation runs before any
 * store access and enumerates every violated field.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::content::db;
use crate::backend::content::tags::resolve_tags;
use crate::backend::content::types::{
    ContentItem, ContentMessage, ContentType, CreateContentRequest,
};
use crate::backend::error::{ApiError, FieldViolation};
use crate::backend::middleware::auth::AuthUser;

/// Validate a content creation request
///
/// Checks enum membership for `type`, well-formed absolute URL for `link`,
/// and a non-empty `title`. Returns the parsed content type on success.
pub(crate) fn validate_create(
    request: &CreateContentRequest,
) -> Result<ContentType, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let content_type = ContentType::parse(&request.content_type);
    if content_type.is_none() {
        violations.push(FieldViolation::new(
            "type",
            "must be one of: document, tweet, youtube, link",
        ));
    }

    if url::Url::parse(&request.link).is_err() {
        violations.push(FieldViolation::new("link", "must be a valid absolute URL"));
    }

    if request.title.is_empty() {
        violations.push(FieldViolation::new("title", "is required"));
    }

    match content_type {
        Some(ty) if violations.is_empty() => Ok(ty),
        _ => Err(violations),
    }
}

/// Create content handler
///
/// Tag titles are resolved (get-or-create, first-occurrence order, repeats
/// collapsed) before the content row is inserted.
///
/// # Errors
///
/// * `400 Bad Request` - validation failure
/// * `401/403` - rejected by the auth middleware before reaching here
/// * `500 Internal Server Error` - store failure
pub async fn create_content(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateContentRequest>,
) -> Result<(StatusCode, Json<ContentMessage>), ApiError> {
    let content_type = validate_create(&request).map_err(ApiError::Validation)?;

    let tags = resolve_tags(&pool, &request.tags).await?;

    let content_id = db::create_content(
        &pool,
        user.user_id,
        content_type,
        &request.link,
        &request.title,
        &tags,
    )
    .await?;

    tracing::info!(
        "Content created: {} ({}) for user {}",
        content_id,
        content_type.as_str(),
        user.user_id
    );

    Ok((
        StatusCode::CREATED,
        Json(ContentMessage {
            message: "Content created".to_string(),
        }),
    ))
}

/// List content handler
///
/// Returns every record owned by the caller, tags and username resolved.
pub async fn list_content(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<ContentItem>>, ApiError> {
    let items = db::list_by_owner(&pool, user.user_id).await?;
    Ok(Json(items))
}

/// Delete content handler
///
/// # Errors
///
/// * `404 Not Found` - no record with that id is owned by the caller; the
///   same error whether the record is absent or belongs to someone else
pub async fn delete_content(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(content_id): Path<Uuid>,
) -> Result<Json<ContentMessage>, ApiError> {
    let deleted = db::delete_by_owner_and_id(&pool, user.user_id, content_id).await?;

    if !deleted {
        return Err(ApiError::NotFound(
            "content not found or unauthorized".to_string(),
        ));
    }

    tracing::info!("Content deleted: {} by user {}", content_id, user.user_id);

    Ok(Json(ContentMessage {
        message: "Content deleted successfully".to_string(),
    }))
}
