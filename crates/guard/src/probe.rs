//! Filesystem checks for a single content file

use cstore_errors::StorageError;
use std::path::Path;

/// What was found at a mapped content path
#[derive(Debug, Clone)]
pub enum FileProbe {
    /// A regular file of `size` bytes
    Regular { size: u64 },
    /// Nothing usable: missing, not a regular file, or not accessible
    Absent(StorageError),
}

/// Stat `path`, following symlinks
pub async fn probe_file(path: &Path) -> FileProbe {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => FileProbe::Regular {
            size: metadata.len(),
        },
        Ok(_) => FileProbe::Absent(StorageError::NotAFile {
            path: path.display().to_string(),
        }),
        Err(e) => FileProbe::Absent(StorageError::from_io_with_path(&e, path)),
    }
}
