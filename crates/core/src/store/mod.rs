//! File record store - extracted metadata keyed on the scanned identifier.
//!
//! The pipeline only ever writes through `upsert`; records are never
//! deleted here. Reads exist for the run summary and for tests.

mod sqlite;
mod types;

pub use sqlite::SqliteFileStore;
pub use types::*;

/// Trait for file record storage.
pub trait FileStore: Send + Sync {
    /// Insert or update a batch of records in one transaction.
    ///
    /// Keyed on `id`. On conflict, `name`, `ext`, `url` and `size` are
    /// overwritten unconditionally from the incoming record; `created_at`
    /// is left untouched and `updated_at` is refreshed. The whole batch
    /// commits or rolls back atomically. An empty batch is a no-op.
    ///
    /// Returns the number of rows affected.
    fn upsert(&self, records: &[FileRecord]) -> Result<usize, StoreError>;

    /// Read one record back by id.
    fn get(&self, id: u32) -> Result<Option<StoredFile>, StoreError>;

    /// Number of persisted records.
    fn count(&self) -> Result<u64, StoreError>;
}
