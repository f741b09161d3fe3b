use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::search::DEFAULT_ENDPOINT;

pub const API_KEY_VAR: &str = "PEXELS_API_KEY";
pub const API_URL_VAR: &str = "PEXELS_API_URL";
pub const BASE_DIR_VAR: &str = "IMAGES_BASE_DIR";
pub const DELAY_VAR: &str = "REQUEST_DELAY_MS";
pub const CATALOG_VAR: &str = "DESTINATIONS_FILE";

pub const DEFAULT_BASE_DIR: &str = "public/images/default";
pub const DEFAULT_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub api_url: String,
    pub base_dir: PathBuf,
    pub request_delay: Duration,
    pub catalog_file: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = value(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        let request_delay = match value(DELAY_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue {
                    name: DELAY_VAR,
                    value: raw,
                })?,
            None => Duration::from_millis(DEFAULT_DELAY_MS),
        };

        let settings = Settings {
            api_key,
            api_url: value(API_URL_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            base_dir: value(BASE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR)),
            request_delay,
            catalog_file: value(CATALOG_VAR).map(PathBuf::from),
        };

        log::debug!("[CONFIG] Search endpoint: {}", settings.api_url);
        log::debug!("[CONFIG] Base directory: {:?}", settings.base_dir);
        log::debug!("[CONFIG] Request delay: {:?}", settings.request_delay);

        Ok(settings)
    }

    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog_file {
            Some(path) => Catalog::from_file(path),
            None => {
                log::info!("[CONFIG] Using built-in destination catalog");
                Catalog::builtin()
            }
        }
    }
}
