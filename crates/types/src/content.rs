//! Content URL identifiers
//!
//! A content URL such as `store://2024/01/01/abc123456789.bin` names one
//! content blob. The repository indexes it for reverse lookup by the
//! trailing characters of the URL together with a CRC-32 of the whole URL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme prefix carried by every content URL of the file content store
pub const STORE_SCHEME: &str = "store://";

/// Number of trailing characters stored as the short form of a content URL
pub const SHORT_FORM_LEN: usize = 12;

/// A content URL as stored in `alf_content_url.content_url`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentUrl(String);

impl ContentUrl {
    /// Wrap a raw content URL string
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The full URL
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last [`SHORT_FORM_LEN`] characters of the URL
    ///
    /// URLs shorter than that are returned whole.
    #[must_use]
    pub fn short_form(&self) -> &str {
        let chars = self.0.chars().count();
        if chars <= SHORT_FORM_LEN {
            return &self.0;
        }
        let start = self
            .0
            .char_indices()
            .nth(chars - SHORT_FORM_LEN)
            .map_or(0, |(idx, _)| idx);
        &self.0[start..]
    }

    /// CRC-32 (IEEE) of the URL bytes, widened for the `BIGINT` column
    #[must_use]
    pub fn checksum(&self) -> i64 {
        i64::from(crc32fast::hash(self.0.as_bytes()))
    }

    /// Part of the URL after the store scheme, if it has one
    #[must_use]
    pub fn relative_path(&self) -> Option<&str> {
        self.0.strip_prefix(STORE_SCHEME)
    }
}

impl fmt::Display for ContentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ContentUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for ContentUrl {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_form_takes_trailing_chars() {
        let url = ContentUrl::new("store://2024/01/01/abc123456789.bin");
        assert_eq!(url.short_form(), "23456789.bin");
        assert_eq!(url.short_form().chars().count(), SHORT_FORM_LEN);
    }

    #[test]
    fn short_form_of_short_url_is_whole_url() {
        let url = ContentUrl::new("store://a");
        assert_eq!(url.short_form(), "store://a");
    }

    #[test]
    fn short_form_counts_characters_not_bytes() {
        let url = ContentUrl::new("store://dossier/résumé-ñandú.bin");
        assert_eq!(url.short_form(), "mé-ñandú.bin");
        assert_eq!(url.short_form().chars().count(), SHORT_FORM_LEN);
    }

    #[test]
    fn checksum_matches_crc32_check_value() {
        assert_eq!(ContentUrl::new("123456789").checksum(), 0xCBF4_3926);
    }

    #[test]
    fn checksum_is_stable_and_unsigned() {
        let url = ContentUrl::new("store://2024/01/01/abc123456789.bin");
        let first = url.checksum();
        assert_eq!(first, url.clone().checksum());
        assert!(first >= 0);
        assert!(first <= i64::from(u32::MAX));
    }

    #[test]
    fn relative_path_strips_scheme() {
        let url = ContentUrl::new("store://2024/01/01/abc.bin");
        assert_eq!(url.relative_path(), Some("2024/01/01/abc.bin"));
        assert_eq!(ContentUrl::new("s3://bucket/abc.bin").relative_path(), None);
    }
}
