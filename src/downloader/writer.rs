use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DownloadError;

/// A file that landed on disk.
#[derive(Debug, PartialEq)]
pub struct StoredFile {
    pub source: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Creates any missing parent directories, then writes `content` to `path`,
/// replacing whatever was there.
pub fn write_file(
    source: &str,
    path: &Path,
    content: &[u8],
) -> Result<StoredFile, DownloadError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            log::warn!("[WRITE] Could not create {:?}: {}", parent, err);
            DownloadError::Write(err.to_string())
        })?;
    }

    fs::write(path, content).map_err(|err| {
        log::warn!("[WRITE] Could not write {:?}: {}", path, err);
        DownloadError::Write(err.to_string())
    })?;

    Ok(StoredFile {
        source: source.to_string(),
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}
