//! User database model

use sqlx::FromRow;

/// Database model for users_user table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub speaker_name: String,
    pub bio: String,
    /// Stored file name relative to the media root, blank when unset
    pub photo: String,
    pub github_profile_url: String,
    pub twitter_profile_url: String,
    pub facebook_profile_url: String,
}
