use serde::Deserialize;
use url::Url;

use crate::downloader::Fetcher;
use crate::error::DownloadError;

pub const DEFAULT_ENDPOINT: &str = "https://api.pexels.com/v1";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSources,
}

#[derive(Debug, Deserialize)]
struct PhotoSources {
    large2x: String,
}

/// Client for the Pexels photo search, one result per query.
pub struct ImageSearch<F: Fetcher> {
    fetcher: F,
    endpoint: String,
    api_key: String,
}

impl<F: Fetcher> ImageSearch<F> {
    pub fn new(fetcher: F, endpoint: &str, api_key: &str) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn search_url(&self, query: &str) -> Result<String, DownloadError> {
        let base = format!("{}/search", self.endpoint);

        Url::parse_with_params(&base, &[("query", query), ("per_page", "1")])
            .map(String::from)
            .map_err(|_| DownloadError::InvalidUrl)
    }

    /// Returns the large image URL of the first photo matching `query`.
    pub fn find_image(&self, query: &str) -> Result<String, DownloadError> {
        let url = self.search_url(query)?;

        let body = self
            .fetcher
            .fetch(&url, &[("Authorization", self.api_key.as_str())])
            .into_body()?;

        let response: SearchResponse = serde_json::from_slice(&body).map_err(|err| {
            log::warn!("[SEARCH] Unreadable response for {:?}: {}", query, err);
            DownloadError::MalformedResponse(err.to_string())
        })?;

        response
            .photos
            .into_iter()
            .next()
            .map(|photo| photo.src.large2x)
            .ok_or(DownloadError::NoResults)
    }
}
