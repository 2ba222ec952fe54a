/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * { "error": "validation failed", "fields": [{"field": "...", "message": "..."}] }
 * ```
 *
 * The `fields` array is present only for validation errors. Internal errors
 * are logged here with full detail; the body carries only the opaque message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let ApiError::Internal(ref source) = self {
            tracing::error!("internal error serving request: {:?}", source);
        }

        let body = match &self {
            ApiError::Validation(fields) => serde_json::json!({
                "error": "Validation failed",
                "fields": fields,
            }),
            other => serde_json::json!({
                "error": other.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::types::FieldViolation;

    #[test]
    fn test_validation_response_lists_fields() {
        let err = ApiError::Validation(vec![
            FieldViolation::new("username", "must be at least 3 characters"),
            FieldViolation::new("password", "must be at least 6 characters"),
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_response_status() {
        let err = ApiError::NotFound("share link not found".into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
