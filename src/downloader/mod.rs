mod fetcher;
mod writer;

use std::env;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::DownloadError;

pub use fetcher::UReqFetcher;
pub use writer::{write_file, StoredFile};

#[cfg(test)]
pub use fetcher::MockFetcher;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok(Vec<u8>),
    Status(u16),
    InvalidBody,
    NetworkError,
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn network_error() -> Self {
        Self::NetworkError
    }

    /// Body on HTTP 200, the matching error otherwise.
    pub fn into_body(self) -> Result<Vec<u8>, DownloadError> {
        match self {
            Response::Ok(body) => Ok(body),
            Response::Status(code) => Err(DownloadError::HttpStatus(code)),
            Response::InvalidBody => Err(DownloadError::InvalidBody),
            Response::NetworkError => Err(DownloadError::NetworkError),
        }
    }
}

pub trait Fetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        (**self).fetch(url, headers)
    }
}

pub struct Downloader<T: Fetcher> {
    fetcher: T,
    path: PathBuf,
}

impl<T> Downloader<T>
where
    T: Fetcher,
{
    pub fn with_fetcher(path: &Path, fetcher: T) -> std::io::Result<Self> {
        let path = Self::absolute_path(path)?;

        Ok(Downloader { path, fetcher })
    }

    pub fn base_dir(&self) -> &Path {
        &self.path
    }

    /// Fetches `url` and stores the body at `file` below the base directory.
    pub fn download(&self, url: &str, file: &Path) -> Result<StoredFile, DownloadError> {
        let url = Url::parse(url).map_err(|_| DownloadError::InvalidUrl)?;

        let url = url.as_str();

        let body = self.fetcher.fetch(url, &[]).into_body()?;

        write_file(url, &self.path.join(file), &body)
    }

    fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(env::current_dir()?.join(path))
        }
    }
}
