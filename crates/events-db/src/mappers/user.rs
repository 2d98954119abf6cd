//! User model -> entity mapper

use events_core::{RecordId, StoredFile, User};

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: RecordId::new(model.id),
            speaker_name: model.speaker_name,
            bio: model.bio,
            photo: StoredFile::from_name(model.photo),
            github_profile_url: model.github_profile_url,
            twitter_profile_url: model.twitter_profile_url,
            facebook_profile_url: model.facebook_profile_url,
        }
    }
}
