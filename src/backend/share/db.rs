/**
 * Share-Link Store
 *
 * At most one share link per user, enforced by a unique constraint on
 * `user_id`. Tokens are 16 random bytes rendered as hex - unguessable, and
 * never reused after a disable (re-enabling mints a fresh one).
 */

use chrono::{DateTime, Utc};
use rand::RngCore;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::backend::auth::users::is_unique_violation;

/// A share-link row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShareLink {
    pub id: Uuid,
    /// Opaque token, 32 hex chars (16 bytes of entropy)
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Generate an opaque share token: 16 random bytes, hex-encoded
pub fn generate_share_token() -> String {
    let mut buf = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut buf);
    hex::encode(buf)
}

/// Look up the share link owned by a user
pub async fn find_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Option<ShareLink>, sqlx::Error> {
    sqlx::query_as::<_, ShareLink>(
        r#"
        SELECT id, token, user_id, created_at
        FROM share_links
        WHERE user_id = $1
        "#,
    )
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Enable sharing for a user
///
/// Idempotent: an existing link is returned unchanged. A concurrent enable
/// that wins the insert race is resolved by re-running the lookup, the same
/// retry-on-unique-violation pattern used for tags.
pub async fn enable_sharing(pool: &PgPool, owner_id: Uuid) -> Result<ShareLink, sqlx::Error> {
    if let Some(link) = find_by_owner(pool, owner_id).await? {
        return Ok(link);
    }

    let id = Uuid::new_v4();
    let token = generate_share_token();
    let now = Utc::now();

    let inserted = sqlx::query_as::<_, ShareLink>(
        r#"
        INSERT INTO share_links (id, token, user_id, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, token, user_id, created_at
        "#,
    )
    .bind(id)
    .bind(&token)
    .bind(owner_id)
    .bind(now)
    .fetch_one(pool)
    .await;

    match inserted {
        Ok(link) => Ok(link),
        Err(e) if is_unique_violation(&e) => {
            // A concurrent enable inserted first; reuse its token.
            find_by_owner(pool, owner_id)
                .await?
                .ok_or(sqlx::Error::RowNotFound)
        }
        Err(e) => Err(e),
    }
}

/// Disable sharing for a user
///
/// Deletes any existing link row; no error when none existed.
pub async fn disable_sharing(pool: &PgPool, owner_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM share_links
        WHERE user_id = $1
        "#,
    )
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Resolve a share token to its owner
///
/// Returns the owner's id and username, or `None` if no row matches.
pub async fn resolve_share_token(
    pool: &PgPool,
    token: &str,
) -> Result<Option<(Uuid, String)>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT u.id, u.username
        FROM share_links sl
        JOIN users u ON u.id = sl.user_id
        WHERE sl.token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| (r.get("id"), r.get("username"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_is_32_hex_chars() {
        let token = generate_share_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_share_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }
}
