//! Database test fixtures
//!
//! Connects to the test database, runs migrations, and truncates all tables
//! so each test starts from a clean slate.

use sqlx::PgPool;

/// Test database fixture
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect to the test database, or `None` when none is configured
    ///
    /// Reads `TEST_DATABASE_URL`, falling back to `DATABASE_URL`. Runs
    /// migrations and truncates every table.
    pub async fn new() -> Option<Self> {
        let url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let pool = match PgPool::connect(&url).await {
            Ok(pool) => pool,
            Err(e) => {
                eprintln!("skipping: test database unreachable: {}", e);
                return None;
            }
        };

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        sqlx::query("TRUNCATE TABLE content_tags, content, tags, share_links, users CASCADE")
            .execute(&pool)
            .await
            .expect("failed to truncate test tables");

        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Count rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("count query failed");
        row.0
    }
}
