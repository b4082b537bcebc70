//! SQLite-backed file store implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{FileRecord, FileStore, StoreError, StoredFile};

/// SQLite-backed file store.
pub struct SqliteFileStore {
    conn: Mutex<Connection>,
}

impl SqliteFileStore {
    /// Create a new store, creating the database file and table if needed.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            r#"
            -- One row per scanned id that resolved to a real file
            CREATE TABLE IF NOT EXISTS files (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                ext TEXT NOT NULL,
                url TEXT NOT NULL,
                size INTEGER,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_files_ext ON files(ext);
            "#,
        )
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn row_to_stored_file(row: &rusqlite::Row) -> rusqlite::Result<StoredFile> {
        let size: Option<i64> = row.get(4)?;
        let created_str: String = row.get(5)?;
        let updated_str: String = row.get(6)?;

        let created_at = DateTime::parse_from_rfc3339(&created_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        let updated_at = DateTime::parse_from_rfc3339(&updated_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(StoredFile {
            id: row.get(0)?,
            name: row.get(1)?,
            ext: row.get(2)?,
            url: row.get(3)?,
            size: size.map(|s| s as u64),
            created_at,
            updated_at,
        })
    }
}

impl FileStore for SqliteFileStore {
    fn upsert(&self, records: &[FileRecord]) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn.lock().unwrap();
        let now_str = Utc::now().to_rfc3339();

        let tx = conn
            .transaction()
            .map_err(|e| StoreError::Database(e.to_string()))?;

        let mut affected = 0;
        for record in records {
            affected += tx
                .execute(
                    "INSERT INTO files (id, name, ext, url, size, created_at, updated_at)
                     VALUES (?, ?, ?, ?, ?, ?, ?)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        ext = excluded.ext,
                        url = excluded.url,
                        size = excluded.size,
                        updated_at = excluded.updated_at",
                    params![
                        record.id,
                        &record.name,
                        &record.ext,
                        &record.url,
                        record.size.map(|s| s as i64),
                        &now_str,
                        &now_str,
                    ],
                )
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        tx.commit().map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(affected)
    }

    fn get(&self, id: u32) -> Result<Option<StoredFile>, StoreError> {
        let conn = self.conn.lock().unwrap();

        match conn.query_row(
            "SELECT id, name, ext, url, size, created_at, updated_at FROM files WHERE id = ?",
            params![id],
            Self::row_to_stored_file,
        ) {
            Ok(file) => Ok(Some(file)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e.to_string())),
        }
    }

    fn count(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().unwrap();

        conn.query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
