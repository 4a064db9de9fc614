//! Content URL to filesystem path mapping

use cstore_types::{ContentUrl, STORE_SCHEME};
use std::path::{Path, PathBuf};

/// On-disk location of `content_url` under the content store `root`
///
/// The `store://` prefix is replaced by `root` followed by `/`. A URL
/// without the prefix is returned unchanged.
#[must_use]
pub fn map_to_path(content_url: &ContentUrl, root: &Path) -> PathBuf {
    match content_url.relative_path() {
        Some(relative) => {
            let mut mapped = root.as_os_str().to_os_string();
            mapped.push("/");
            mapped.push(relative);
            PathBuf::from(mapped)
        }
        None => {
            tracing::debug!(
                content_url = %content_url,
                scheme = STORE_SCHEME,
                "content url has no store scheme, using it verbatim"
            );
            PathBuf::from(content_url.as_str())
        }
    }
}
