//! Typed representations for sponsored and keynote events
//!
//! Field declaration order is the JSON key order.

use chrono::{DateTime, Utc};
use events_core::{EventType, KeynoteEvent, Language, MediaUrls, PythonLevel, RecordId, SponsoredEvent};
use serde::Serialize;

use super::context::RequestContext;
use super::error::RepresentationError;
use super::speakers::{format_speakers, SpeakerResponse};

// ============================================================================
// Sponsored Events
// ============================================================================

/// Sponsored event detail
#[derive(Debug, Clone, Serialize)]
pub struct SponsoredEventDetailResponse {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub language: Language,
    pub python_level: PythonLevel,
    pub recording_policy: bool,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub detailed_description: String,
    pub slide_link: String,
    pub slido_embed_link: String,
    /// The host, with profile details
    pub speakers: Vec<SpeakerResponse>,
    pub location: String,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub event_type: EventType,
    /// The stored remoting policy, emitted last under the talk/tutorial key
    #[serde(rename = "is_remote")]
    pub remoting_policy: String,
}

/// Sponsored event list item
#[derive(Debug, Clone, Serialize)]
pub struct SponsoredEventListResponse {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub speakers: Vec<SpeakerResponse>,
    pub event_type: EventType,
}

impl SponsoredEventDetailResponse {
    pub fn new(ctx: &RequestContext, event: &SponsoredEvent) -> Result<Self, RepresentationError> {
        Ok(Self {
            id: event.id,
            title: event.title.clone(),
            category: event.category.clone(),
            language: event.language,
            python_level: event.python_level,
            recording_policy: event.recording_policy,
            abstract_text: event.abstract_text.clone(),
            detailed_description: event.detailed_description.clone(),
            slide_link: event.slide_link.clone(),
            slido_embed_link: event.slido_embed_link.clone(),
            speakers: format_speakers(ctx, [&event.host], true)?,
            location: event.location.clone(),
            begin_time: event.begin_time,
            end_time: event.end_time,
            event_type: EventType::Sponsored,
            remoting_policy: event.remoting_policy.clone(),
        })
    }
}

impl SponsoredEventListResponse {
    pub fn new(ctx: &RequestContext, event: &SponsoredEvent) -> Result<Self, RepresentationError> {
        Ok(Self {
            id: event.id,
            title: event.title.clone(),
            category: event.category.clone(),
            speakers: format_speakers(ctx, [&event.host], false)?,
            event_type: EventType::Sponsored,
        })
    }
}

// ============================================================================
// Keynotes
// ============================================================================

/// Keynote event
#[derive(Debug, Clone, Serialize)]
pub struct KeynoteEventResponse {
    pub id: RecordId,
    pub speaker: KeynoteSpeakerResponse,
    pub session: KeynoteSessionResponse,
    pub slido: String,
    pub youtube_id: String,
    pub social_item: KeynoteSocialResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeynoteSpeakerResponse {
    pub name_zh_hant: String,
    pub name_en_us: String,
    pub bio_zh_hant: String,
    pub bio_en_us: String,
    /// Media URL of the photo; not absolutized
    pub photo: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeynoteSessionResponse {
    pub title_zh_hant: String,
    pub title_en_us: String,
    pub description_zh_hant: String,
    pub description_en_us: String,
    pub slides: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeynoteSocialResponse {
    pub linkedin: String,
    pub twitter: String,
    pub github: String,
}

impl KeynoteEventResponse {
    /// Fails when the keynote has no speaker photo
    pub fn new(media: &MediaUrls, event: &KeynoteEvent) -> Result<Self, RepresentationError> {
        let photo = event
            .speaker_photo
            .as_ref()
            .ok_or(RepresentationError::MissingAttribute {
                entity: "keynote",
                id: event.id,
                attribute: "speaker_photo",
            })?;

        Ok(Self {
            id: event.id,
            speaker: KeynoteSpeakerResponse {
                name_zh_hant: event.speaker_name.zh_hant.clone(),
                name_en_us: event.speaker_name.en_us.clone(),
                bio_zh_hant: event.speaker_bio.zh_hant.clone(),
                bio_en_us: event.speaker_bio.en_us.clone(),
                photo: photo.url(media),
            },
            session: KeynoteSessionResponse {
                title_zh_hant: event.session_title.zh_hant.clone(),
                title_en_us: event.session_title.en_us.clone(),
                description_zh_hant: event.session_description.zh_hant.clone(),
                description_en_us: event.session_description.en_us.clone(),
                slides: event.session_slides.clone(),
            },
            slido: event.slido.clone(),
            youtube_id: event.youtube_id.clone(),
            social_item: KeynoteSocialResponse {
                linkedin: event.social_linkedin.clone(),
                twitter: event.social_twitter.clone(),
                github: event.social_github.clone(),
            },
        })
    }
}
