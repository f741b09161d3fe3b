pub mod batch;
pub mod catalog;
pub mod config;
pub mod downloader;
pub mod error;
pub mod search;

pub use batch::{Batch, BatchReport, Slot, SlotOutcome};
pub use catalog::{Catalog, Destination};
pub use config::Settings;
pub use downloader::{Downloader, Fetcher, Response, StoredFile, UReqFetcher};
pub use error::{ConfigError, DownloadError};
pub use search::ImageSearch;
