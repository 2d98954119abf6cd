//! Request context - what a representation needs to know about the current request

use std::sync::Arc;

use events_core::MediaUrls;
use url::{Position, Url};

use super::error::RepresentationError;

/// URL of the request being answered, plus media settings
#[derive(Debug, Clone)]
pub struct RequestContext {
    base: Url,
    media: Arc<MediaUrls>,
}

impl RequestContext {
    /// Build the context from the pieces of the incoming request
    ///
    /// # Errors
    /// Returns `RepresentationError::InvalidUrl` if scheme, host and path do
    /// not form a valid URL
    pub fn new(
        scheme: &str,
        host: &str,
        path: &str,
        media: Arc<MediaUrls>,
    ) -> Result<Self, RepresentationError> {
        let path = path.trim_start_matches('/');
        let base = Url::parse(&format!("{scheme}://{host}/{path}"))?;
        Ok(Self { base, media })
    }

    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// Host with the port, when one is not the scheme default
    pub fn host(&self) -> &str {
        &self.base[Position::BeforeHost..Position::AfterPort]
    }

    pub fn path(&self) -> &str {
        self.base.path()
    }

    pub fn media(&self) -> &MediaUrls {
        &self.media
    }

    /// Resolve `location` against the request URL
    ///
    /// Full URLs are kept, scheme-relative ones take the request scheme, and
    /// paths resolve against the request path. Unsafe characters are escaped.
    pub fn build_absolute_uri(&self, location: &str) -> Result<String, RepresentationError> {
        Ok(self.base.join(location)?.into())
    }
}
