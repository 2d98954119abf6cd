//! Keynote database model

use sqlx::FromRow;

/// Database model for events_keynoteevent table
#[derive(Debug, Clone, FromRow)]
pub struct KeynoteEventModel {
    pub id: i64,
    pub speaker_name_zh_hant: String,
    pub speaker_name_en_us: String,
    pub speaker_bio_zh_hant: String,
    pub speaker_bio_en_us: String,
    pub speaker_photo: String,
    pub session_title_zh_hant: String,
    pub session_title_en_us: String,
    pub session_description_zh_hant: String,
    pub session_description_en_us: String,
    pub session_slides: String,
    pub slido: String,
    pub youtube_id: String,
    pub social_linkedin: String,
    pub social_twitter: String,
    pub social_github: String,
}
