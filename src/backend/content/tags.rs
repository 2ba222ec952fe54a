/**
 * Tag Store
 *
 * Unique tag labels, created lazily the first time a content creation
 * request references them. Tags are never deleted; an orphaned tag with no
 * referencing content is tolerated.
 *
 * # Concurrency
 *
 * Two requests may race to create the same brand-new title. The loser's
 * insert hits the unique constraint; it retries the lookup instead of
 * propagating the error. No locking, no upsert - unrelated writes are
 * never serialized against each other.
 */

use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::is_unique_violation;

/// Bound on lookup/insert attempts in `get_or_create_tag`
const MAX_ATTEMPTS: usize = 3;

/// A tag row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Tag {
    pub id: Uuid,
    pub title: String,
}

/// Look up a tag by exact, case-sensitive title
pub async fn find_tag(pool: &PgPool, title: &str) -> Result<Option<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>(
        r#"
        SELECT id, title
        FROM tags
        WHERE title = $1
        "#,
    )
    .bind(title)
    .fetch_optional(pool)
    .await
}

/// Get a tag by title, creating it if absent
///
/// On a unique violation (a concurrent creator won the race) the lookup is
/// retried rather than the error propagated.
pub async fn get_or_create_tag(pool: &PgPool, title: &str) -> Result<Tag, sqlx::Error> {
    for _ in 0..MAX_ATTEMPTS {
        if let Some(tag) = find_tag(pool, title).await? {
            return Ok(tag);
        }

        let id = Uuid::new_v4();
        let inserted = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (id, title)
            VALUES ($1, $2)
            RETURNING id, title
            "#,
        )
        .bind(id)
        .bind(title)
        .fetch_one(pool)
        .await;

        match inserted {
            Ok(tag) => return Ok(tag),
            Err(e) if is_unique_violation(&e) => {
                // Lost the creation race; the row now exists, re-run the lookup.
                tracing::debug!("tag '{}' created concurrently, retrying lookup", title);
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Err(sqlx::Error::Protocol(
        "tag get-or-create exhausted its retries".into(),
    ))
}

/// De-duplicate tag titles, preserving first-occurrence order
///
/// `["a", "a", "b"]` resolves to `["a", "b"]`; the content references both.
pub(crate) fn dedup_titles(titles: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::with_capacity(titles.len());
    for title in titles {
        if !seen.contains(&title.as_str()) {
            seen.push(title);
        }
    }
    seen
}

/// Resolve a list of tag titles to tag rows, creating missing tags
///
/// Repeated titles collapse to one tag; order of first occurrence is kept.
pub async fn resolve_tags(pool: &PgPool, titles: &[String]) -> Result<Vec<Tag>, sqlx::Error> {
    let mut tags = Vec::new();
    for title in dedup_titles(titles) {
        tags.push(get_or_create_tag(pool, title).await?);
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_collapses_repeats() {
        assert_eq!(dedup_titles(&titles(&["a", "a", "b"])), vec!["a", "b"]);
    }

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        assert_eq!(
            dedup_titles(&titles(&["z", "a", "z", "m", "a"])),
            vec!["z", "a", "m"]
        );
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        assert_eq!(dedup_titles(&titles(&["Rust", "rust"])), vec!["Rust", "rust"]);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_titles(&[]).is_empty());
    }
}
