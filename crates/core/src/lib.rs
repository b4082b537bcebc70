pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod metrics;
pub mod scanner;
pub mod store;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    FetcherConfig, ScanConfig,
};
pub use extractor::{extract, TorrentParseError, FORCE_DOWNLOAD};
pub use fetcher::{download_url, FetchOutcome, Fetcher, HttpFetcher, MissReason, RawDownload};
pub use scanner::{chunk_ranges, ScanError, ScanSummary, Scanner};
pub use store::{FileRecord, FileStore, SqliteFileStore, StoreError, StoredFile};
