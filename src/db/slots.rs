// src/db/slots.rs
use rusqlite::{params, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::suppression::SlotStorage;

/// Durable slots for one visitor, keyed by the hash of their client token.
pub struct SqliteSlots {
    db: Database,
    client_hash: [u8; 32],
}

impl SqliteSlots {
    pub fn new(db: Database, client_hash: [u8; 32]) -> Self {
        Self { db, client_hash }
    }
}

impl SlotStorage for SqliteSlots {
    fn read(&self, key: &str) -> Result<Option<String>, ServerError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "select value from client_slots where client_hash = ? and key = ?",
                params![self.client_hash.as_slice(), key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("slot read failed: {e}")))
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        self.db.with_conn(|conn| {
            conn.execute(
                r#"
                insert into client_slots (client_hash, key, value, updated_at)
                values (?, ?, ?, ?)
                on conflict (client_hash, key)
                do update set value = excluded.value, updated_at = excluded.updated_at
                "#,
                params![self.client_hash.as_slice(), key, value, now],
            )
            .map_err(|e| ServerError::DbError(format!("slot write failed: {e}")))?;
            Ok(())
        })
    }
}
