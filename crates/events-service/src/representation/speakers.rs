//! Speaker formatter

use events_core::User;
use serde::Serialize;

use super::context::RequestContext;
use super::error::RepresentationError;

/// One speaker as shown on an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerResponse {
    /// Absolute URL of the speaker photo (or the default thumbnail)
    pub thumbnail_url: String,
    pub name: String,
    #[serde(flatten)]
    pub details: Option<SpeakerDetails>,
}

/// Profile fields included only in detail views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerDetails {
    pub github_profile_url: String,
    pub twitter_profile_url: String,
    pub facebook_profile_url: String,
    pub bio: String,
}

impl SpeakerResponse {
    pub fn new(
        ctx: &RequestContext,
        user: &User,
        show_details: bool,
    ) -> Result<Self, RepresentationError> {
        let thumbnail_url = ctx.build_absolute_uri(&user.thumbnail_url(ctx.media()))?;
        Ok(Self {
            thumbnail_url,
            name: user.speaker_name.clone(),
            details: show_details.then(|| SpeakerDetails::from(user)),
        })
    }
}

impl From<&User> for SpeakerDetails {
    fn from(user: &User) -> Self {
        Self {
            github_profile_url: user.github_profile_url.clone(),
            twitter_profile_url: user.twitter_profile_url.clone(),
            facebook_profile_url: user.facebook_profile_url.clone(),
            bio: user.bio.clone(),
        }
    }
}

/// Format speakers in input order, one entry per user
pub fn format_speakers<'a>(
    ctx: &RequestContext,
    speakers: impl IntoIterator<Item = &'a User>,
    show_details: bool,
) -> Result<Vec<SpeakerResponse>, RepresentationError> {
    speakers
        .into_iter()
        .map(|user| SpeakerResponse::new(ctx, user, show_details))
        .collect()
}
