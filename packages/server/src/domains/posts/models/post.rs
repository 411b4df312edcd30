use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::NormalizedPage;

/// Post - a bulletin board entry
///
/// `no` and `created_at` are assigned by storage on insert and never change.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub no: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Post Queries
// =============================================================================

impl Post {
    pub async fn create(title: &str, content: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO post (title, content)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Fetch one page below the cursor, newest first.
    ///
    /// Every returned row satisfies `no < cursor` strictly, so re-querying
    /// with the last row's `no` never repeats a row.
    pub async fn find_by_cursor(page: NormalizedPage, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM post
            WHERE no < $1
            ORDER BY no DESC
            LIMIT $2
            "#,
        )
        .bind(page.cursor)
        .bind(page.size)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_no(no: i32, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM post WHERE no = $1")
            .bind(no)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Merge the supplied fields into the stored row.
    ///
    /// An absent field leaves the stored value untouched. Returns the
    /// affected-row count (0 or 1); the updated row is not read back here.
    pub async fn update(
        no: i32,
        title: Option<&str>,
        content: Option<&str>,
        pool: &PgPool,
    ) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE post SET
                title = COALESCE($2, title),
                content = COALESCE($3, content)
            WHERE no = $1
            "#,
        )
        .bind(no)
        .bind(title)
        .bind(content)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete by number. Deleting an absent `no` is a no-op reported as 0.
    pub async fn delete_by_no(no: i32, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM post WHERE no = $1")
            .bind(no)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
