//! SQLite-backed blob store

use rusqlite::{params, OptionalExtension};

use crate::db::Database;
use crate::error::StorageResult;

use super::BlobStore;

/// Blob store over the `kv_store` table
///
/// Migrations must have been run on the database first.
#[derive(Clone)]
pub struct SqliteBlobStore {
    database: Database,
}

impl SqliteBlobStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl BlobStore for SqliteBlobStore {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let payload = self.database.with_conn(|conn| {
            let payload = conn
                .query_row(
                    "SELECT payload FROM kv_store WHERE storage_key = ?1",
                    [key],
                    |row| row.get::<_, String>(0),
                )
                .optional()?;
            Ok(payload)
        })?;
        Ok(payload)
    }

    fn write(&self, key: &str, payload: &str) -> StorageResult<()> {
        self.database.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv_store (storage_key, payload, updated_at)
                VALUES (?1, ?2, datetime('now'))
                ON CONFLICT(storage_key) DO UPDATE SET
                    payload = excluded.payload,
                    updated_at = excluded.updated_at
                "#,
                params![key, payload],
            )?;
            Ok(())
        })?;
        Ok(())
    }
}
