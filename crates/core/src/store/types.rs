//! Types for the file record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One extracted file, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Scanned identifier; the primary key.
    pub id: u32,
    /// Filename with the site branding token stripped.
    pub name: String,
    /// Extension after the last `.` of the name.
    pub ext: String,
    /// Canonical download URL for this id.
    pub url: String,
    /// Size in bytes; `None` when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A record as read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: u32,
    pub name: String,
    pub ext: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Set once at first insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write, including no-op content.
    pub updated_at: DateTime<Utc>,
}

/// Errors for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_record_serialization_skips_unknown_size() {
        let record = FileRecord {
            id: 42,
            name: "Foo.zip".to_string(),
            ext: "zip".to_string(),
            url: "https://freetp.org/engine/download.php?id=42".to_string(),
            size: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("size"));

        let with_size = FileRecord {
            size: Some(1024),
            ..record
        };
        let json = serde_json::to_string(&with_size).unwrap();
        assert!(json.contains("\"size\":1024"));
    }
}
