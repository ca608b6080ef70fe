//! Repository layer for database operations.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

/// Key/value repository over the `kv_store` table.
///
/// Values are opaque text blobs addressed by `(namespace, key)`.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Read the value stored under `namespace`/`key`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_value(&self, namespace: &str, key: &str) -> Result<Option<String>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT value FROM kv_store
            WHERE namespace = ? AND key = ?
            "#,
        )
        .bind(namespace)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get::<String, _>("value")))
    }

    /// Insert or overwrite the value under `namespace`/`key`.
    ///
    /// # Errors
    /// Returns an error if the upsert fails.
    pub async fn put_value(&self, namespace: &str, key: &str, value: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (namespace, key, value, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(namespace, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(namespace)
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
