//! User entity - a speaker as shown on the schedule

use crate::value_objects::{MediaUrls, RecordId, StoredFile};

/// Speaker account with its public profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub speaker_name: String,
    pub bio: String,
    pub photo: Option<StoredFile>,
    pub github_profile_url: String,
    pub twitter_profile_url: String,
    pub facebook_profile_url: String,
}

impl User {
    /// Create a new User with a display name and an empty profile
    pub fn new(id: RecordId, speaker_name: impl Into<String>) -> Self {
        Self {
            id,
            speaker_name: speaker_name.into(),
            bio: String::new(),
            photo: None,
            github_profile_url: String::new(),
            twitter_profile_url: String::new(),
            facebook_profile_url: String::new(),
        }
    }

    /// URL of the speaker thumbnail, falling back to the default head image
    ///
    /// The result may still be host-relative; callers that need an absolute
    /// URL resolve it against the current request.
    pub fn thumbnail_url(&self, media: &MediaUrls) -> String {
        match &self.photo {
            Some(photo) => photo.url(media),
            None => media.default_thumbnail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_url_with_photo() {
        let mut user = User::new(RecordId::new(1), "Ada");
        user.photo = StoredFile::from_name("avatars/ada.png");
        assert_eq!(
            user.thumbnail_url(&MediaUrls::default()),
            "/media/avatars/ada.png"
        );
    }

    #[test]
    fn test_thumbnail_url_default() {
        let user = User::new(RecordId::new(1), "Ada");
        let media = MediaUrls::new("/media/", "/static/images/default_head.png");
        assert_eq!(user.thumbnail_url(&media), "/static/images/default_head.png");
    }
}
