//! Reading pattern files from disk.

use std::path::{Path, PathBuf};

use seams::upload::{SourceFile, UploadError};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read one file fully and decode it as UTF-8.
///
/// # Errors
///
/// Returns [`LoadError::Read`] on I/O failure and [`LoadError::Upload`] for
/// non-UTF-8 content.
pub async fn read_source(path: &Path) -> Result<SourceFile, LoadError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read pattern file");
    Ok(SourceFile::from_bytes(display_name(path), bytes)?)
}

/// Read both files of a pair concurrently, keeping selection order.
///
/// # Errors
///
/// Returns [`UploadError::WrongFileCount`] (wrapped) unless exactly two paths
/// are given, otherwise the first read failure.
pub async fn read_pair(paths: &[PathBuf]) -> Result<Vec<SourceFile>, LoadError> {
    let [left, right] = paths else {
        return Err(UploadError::WrongFileCount(paths.len()).into());
    };
    let (left, right) = tokio::try_join!(read_source(left), read_source(right))?;
    Ok(vec![left, right])
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;
