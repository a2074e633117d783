//! MySQL implementation of link repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, MySqlPool};
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_duplicate_key;

/// MySQL repository for the `links` table.
///
/// All statements are parameterized; values are never interpolated into SQL.
pub struct MySqlLinkRepository {
    pool: Arc<MySqlPool>,
}

impl MySqlLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<MySqlPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LinkRow {
    id: String,
    url: String,
    count: i32,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.url, i64::from(row.count))
    }
}

#[async_trait]
impl LinkRepository for MySqlLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let result = sqlx::query("INSERT INTO links (id, url) VALUES (?, ?)")
            .bind(&new_link.id)
            .bind(&new_link.url)
            .execute(self.pool.as_ref())
            .await;

        match result {
            Ok(_) => Ok(Link::new(new_link.id, new_link.url, 0)),
            Err(e) if is_duplicate_key(&e) => Err(AppError::conflict(
                "Short key already exists",
                json!({ "key": new_link.id }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, url, `count` FROM links WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_count(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE links SET `count` = `count` + 1 WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: i64, page_size: i64) -> Result<Vec<Link>, AppError> {
        let offset = (page - 1) * page_size;

        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT id, url, `count` FROM links ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_visits(&self) -> Result<i64, AppError> {
        // SUM over INT yields DECIMAL in MySQL; cast back to BIGINT.
        let total: i64 =
            sqlx::query_scalar("SELECT CAST(COALESCE(SUM(`count`), 0) AS SIGNED) FROM links")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }
}
