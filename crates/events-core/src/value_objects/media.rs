//! Stored media files and the URL prefixes they resolve against

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped when a stored path becomes a URL path
const FILE_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b'\'');

/// Where stored files are served from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrls {
    /// Prefix for stored files, e.g. `/media/`
    pub media_url: String,
    /// Thumbnail used for speakers without a photo
    pub default_thumbnail: String,
}

impl MediaUrls {
    pub fn new(media_url: impl Into<String>, default_thumbnail: impl Into<String>) -> Self {
        Self {
            media_url: media_url.into(),
            default_thumbnail: default_thumbnail.into(),
        }
    }

    /// Percent-encode a stored file name and join it onto the media prefix
    pub fn resolve(&self, name: &str) -> String {
        let name = name.replace('\\', "/");
        let encoded = utf8_percent_encode(name.trim_start_matches('/'), FILE_PATH);
        let prefix = self.media_url.trim_end_matches('/');
        format!("{prefix}/{encoded}")
    }
}

impl Default for MediaUrls {
    fn default() -> Self {
        Self::new("/media/", "/static/images/default_head.png")
    }
}

/// Reference to a file kept by the storage backend (path relative to the media root)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile(String);

impl StoredFile {
    /// Wrap a stored name; blank names mean "no file"
    pub fn from_name(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Public URL of the file
    pub fn url(&self, media: &MediaUrls) -> String {
        media.resolve(&self.0)
    }
}
