//! Scheduled event database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for events_proposedtalkevent table
#[derive(Debug, Clone, FromRow)]
pub struct TalkEventModel {
    pub id: i64,
    pub proposal_id: i64,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_remote: bool,
    pub location: String,
}

/// Database model for events_proposedtutorialevent table
#[derive(Debug, Clone, FromRow)]
pub struct TutorialEventModel {
    pub id: i64,
    pub proposal_id: i64,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_remote: bool,
    pub location: String,
    pub registration_link: String,
}

/// Database model for events_sponsoredevent joined with its host
#[derive(Debug, Clone, FromRow)]
pub struct SponsoredEventModel {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub language: String,
    pub python_level: String,
    pub recording_policy: bool,
    pub abstract_text: String,
    pub detailed_description: String,
    pub slide_link: String,
    pub slido_embed_link: String,
    pub location: String,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub remoting_policy: String,
    pub host_id: i64,
    pub host_speaker_name: String,
    pub host_bio: String,
    pub host_photo: String,
    pub host_github_profile_url: String,
    pub host_twitter_profile_url: String,
    pub host_facebook_profile_url: String,
}
