/**
 * Content Store
 *
 * Database operations for content records. Listing resolves tag titles and
 * the owner's username in one query so clients never issue follow-up
 * lookups; deletion is owner-scoped in the WHERE clause itself.
 */

use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::backend::content::tags::Tag;
use crate::backend::content::types::{ContentItem, ContentType};

/// Insert a content record with its tag references
///
/// The content row is inserted first, then one `content_tags` row per tag
/// with its position. The two steps are deliberately not wrapped in a
/// transaction with tag creation; a crash mid-way can orphan a tag, which
/// nothing observes.
pub async fn create_content(
    pool: &PgPool,
    owner_id: Uuid,
    content_type: ContentType,
    link: &str,
    title: &str,
    tags: &[Tag],
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO content (id, content_type, link, title, user_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(content_type.as_str())
    .bind(link)
    .bind(title)
    .bind(owner_id)
    .bind(now)
    .execute(pool)
    .await?;

    for (position, tag) in tags.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO content_tags (content_id, tag_id, position)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(tag.id)
        .bind(position as i32)
        .execute(pool)
        .await?;
    }

    Ok(id)
}

/// List all content owned by a user, tags and username resolved
///
/// Ordered by creation time descending for stability; the public contract
/// leaves server-side order unspecified and clients sort themselves.
pub async fn list_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<ContentItem>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.content_type, c.link, c.title, c.created_at, u.username,
               COALESCE(
                   array_agg(t.title ORDER BY ct.position)
                       FILTER (WHERE t.title IS NOT NULL),
                   '{}'
               ) AS tags
        FROM content c
        JOIN users u ON u.id = c.user_id
        LEFT JOIN content_tags ct ON ct.content_id = c.id
        LEFT JOIN tags t ON t.id = ct.tag_id
        WHERE c.user_id = $1
        GROUP BY c.id, c.content_type, c.link, c.title, c.created_at, u.username
        ORDER BY c.created_at DESC, c.id
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ContentItem {
            id: row.get("id"),
            content_type: row.get("content_type"),
            link: row.get("link"),
            title: row.get("title"),
            tags: row.get("tags"),
            username: row.get("username"),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Delete a content record by owner and id
///
/// Returns `false` when nothing was deleted, without distinguishing "does
/// not exist" from "owned by someone else".
pub async fn delete_by_owner_and_id(
    pool: &PgPool,
    owner_id: Uuid,
    content_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM content
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(content_id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
