use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single image slot. Never fatal to the batch.
#[derive(Debug, Error, PartialEq)]
pub enum DownloadError {
    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("network error")]
    NetworkError,

    #[error("invalid url")]
    InvalidUrl,

    #[error("response body could not be read")]
    InvalidBody,

    #[error("search returned no photos")]
    NoResults,

    #[error("malformed search response: {0}")]
    MalformedResponse(String),

    #[error("could not write file: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PEXELS_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse destination catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("destination catalog is empty")]
    EmptyCatalog,

    #[error("invalid destination {id:?}: {reason}")]
    InvalidDestination { id: String, reason: String },

    #[error("could not resolve base directory: {0}")]
    BaseDir(#[from] std::io::Error),
}
