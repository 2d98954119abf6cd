//! Keynote entity - speaker, session and social details inlined on the event

use crate::value_objects::{LocalizedText, RecordId, StoredFile};

/// Keynote session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeynoteEvent {
    pub id: RecordId,
    pub speaker_name: LocalizedText,
    pub speaker_bio: LocalizedText,
    pub speaker_photo: Option<StoredFile>,
    pub session_title: LocalizedText,
    pub session_description: LocalizedText,
    pub session_slides: String,
    pub slido: String,
    pub youtube_id: String,
    pub social_linkedin: String,
    pub social_twitter: String,
    pub social_github: String,
}
