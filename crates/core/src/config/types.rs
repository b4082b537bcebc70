use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("freetp.db")
}

/// Scan range configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// First id to scan (inclusive)
    #[serde(default = "default_scan_start")]
    pub start: u32,
    /// Last id to scan (exclusive)
    #[serde(default = "default_scan_end")]
    pub end: u32,
    /// Ids fetched concurrently and written together
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            start: default_scan_start(),
            end: default_scan_end(),
            chunk_size: default_chunk_size(),
        }
    }
}

fn default_scan_start() -> u32 {
    1
}

fn default_scan_end() -> u32 {
    10_000
}

fn default_chunk_size() -> u32 {
    10
}

/// Fetcher configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetcherConfig {
    /// Download endpoint; the id is appended as a query parameter
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Attempts per id before giving up on read timeouts (default: 5)
    #[serde(default = "default_attempts")]
    pub attempts: u32,
    /// Fixed backoff between read-timeout retries in seconds (default: 5)
    #[serde(default = "default_backoff_secs")]
    pub backoff_secs: u64,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            attempts: default_attempts(),
            backoff_secs: default_backoff_secs(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://freetp.org/engine/download.php".to_string()
}

fn default_attempts() -> u32 {
    5
}

fn default_backoff_secs() -> u64 {
    5
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
