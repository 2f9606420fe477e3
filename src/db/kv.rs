//! Key-value storage used to persist the workout list.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Minimal persistent key-value contract.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// `kv_store` table backed implementation.
pub struct SqliteKvStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteKvStore<'c> {
    /// The schema must already exist (see `db::initialize::init_db`).
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row(params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )?;
        stmt.execute(params![key, value, now])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}
