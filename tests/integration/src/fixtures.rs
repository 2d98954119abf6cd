//! Test fixtures and an in-memory event repository
//!
//! The seeded program mirrors what a small conference database holds:
//! one talk, one tutorial, one sponsored session and one keynote.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use events_core::{
    EventRepository, KeynoteEvent, Language, LocalizedText, Proposal, ProposalKind,
    ProposedTalkEvent, ProposedTutorialEvent, PythonLevel, RecordId, RepoResult, SponsoredEvent,
    StoredFile, User,
};
use serde::Deserialize;

/// Talk id seeded by [`InMemoryEventRepository::seeded`]
pub const TALK_ID: i64 = 5;
/// Tutorial id seeded by [`InMemoryEventRepository::seeded`]
pub const TUTORIAL_ID: i64 = 8;
/// Sponsored event id seeded by [`InMemoryEventRepository::seeded`]
pub const SPONSORED_ID: i64 = 2;

/// Repository serving fixed data
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventRepository {
    pub talks: Vec<ProposedTalkEvent>,
    pub tutorials: Vec<ProposedTutorialEvent>,
    pub sponsored: Vec<SponsoredEvent>,
    pub keynotes: Vec<KeynoteEvent>,
}

impl InMemoryEventRepository {
    /// Repository holding the sample program
    pub fn seeded() -> Self {
        Self {
            talks: vec![sample_talk()],
            tutorials: vec![sample_tutorial()],
            sponsored: vec![sample_sponsored_event()],
            keynotes: vec![sample_keynote()],
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_talk_event(&self, id: RecordId) -> RepoResult<Option<ProposedTalkEvent>> {
        Ok(self.talks.iter().find(|e| e.id == id).cloned())
    }

    async fn list_talk_events(&self) -> RepoResult<Vec<ProposedTalkEvent>> {
        Ok(self.talks.clone())
    }

    async fn find_tutorial_event(&self, id: RecordId) -> RepoResult<Option<ProposedTutorialEvent>> {
        Ok(self.tutorials.iter().find(|e| e.id == id).cloned())
    }

    async fn list_tutorial_events(&self) -> RepoResult<Vec<ProposedTutorialEvent>> {
        Ok(self.tutorials.clone())
    }

    async fn find_sponsored_event(&self, id: RecordId) -> RepoResult<Option<SponsoredEvent>> {
        Ok(self.sponsored.iter().find(|e| e.id == id).cloned())
    }

    async fn list_sponsored_events(&self) -> RepoResult<Vec<SponsoredEvent>> {
        Ok(self.sponsored.clone())
    }

    async fn list_keynote_events(&self) -> RepoResult<Vec<KeynoteEvent>> {
        Ok(self.keynotes.clone())
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}

/// Speaker with a generated bio and GitHub profile
pub fn speaker(id: i64, name: &str, photo: &str) -> User {
    let mut user = User::new(RecordId::new(id), name);
    user.bio = format!("{name} writes Python.");
    user.photo = StoredFile::from_name(photo);
    user.github_profile_url = format!("https://github.com/{}", name.to_lowercase());
    user
}

fn proposal(id: i64, kind: ProposalKind, title: &str, speakers: Vec<User>) -> Proposal {
    Proposal {
        id: RecordId::new(id),
        kind,
        title: title.to_string(),
        category: "PRAC".to_string(),
        language: Language::EnglishEnglish,
        python_level: PythonLevel::Intermediate,
        recording_policy: true,
        abstract_text: format!("{title} in brief."),
        detailed_description: format!("{title} in depth."),
        slide_link: "https://slides.example.com/deck".to_string(),
        slido_embed_link: String::new(),
        speakers,
    }
}

/// Talk 5, "Scaling Python", with one speaker
pub fn sample_talk() -> ProposedTalkEvent {
    ProposedTalkEvent {
        id: RecordId::new(TALK_ID),
        proposal: Some(proposal(
            50,
            ProposalKind::Talk,
            "Scaling Python",
            vec![speaker(1, "Ada", "avatars/ada.png")],
        )),
        begin_time: Utc.with_ymd_and_hms(2026, 9, 5, 1, 30, 0).single(),
        end_time: Utc.with_ymd_and_hms(2026, 9, 5, 2, 15, 0).single(),
        is_remote: false,
        location: "2-all".to_string(),
    }
}

/// Tutorial 8 with two speakers, the second without a photo
pub fn sample_tutorial() -> ProposedTutorialEvent {
    ProposedTutorialEvent {
        id: RecordId::new(TUTORIAL_ID),
        proposal: Some(proposal(
            80,
            ProposalKind::Tutorial,
            "Typing in Practice",
            vec![
                speaker(2, "Grace", "avatars/grace.png"),
                speaker(3, "Linus", ""),
            ],
        )),
        begin_time: None,
        end_time: None,
        is_remote: true,
        location: "3-r1".to_string(),
        registration_link: "https://kktix.example.com/t/8".to_string(),
    }
}

/// Sponsored event 2, delivered remotely
pub fn sample_sponsored_event() -> SponsoredEvent {
    SponsoredEvent {
        id: RecordId::new(SPONSORED_ID),
        host: speaker(40, "Acme", "avatars/acme.png"),
        title: "Sponsor Hour".to_string(),
        category: "OTHER".to_string(),
        language: Language::ChineseChinese,
        python_level: PythonLevel::Novice,
        recording_policy: false,
        abstract_text: "About Acme.".to_string(),
        detailed_description: "More about Acme.".to_string(),
        slide_link: String::new(),
        slido_embed_link: String::new(),
        location: "4-r0".to_string(),
        begin_time: None,
        end_time: None,
        remoting_policy: "remote".to_string(),
    }
}

/// Keynote 1
pub fn sample_keynote() -> KeynoteEvent {
    KeynoteEvent {
        id: RecordId::new(1),
        speaker_name: LocalizedText::new("林", "Lin"),
        speaker_bio: LocalizedText::new("講者", "Speaker"),
        speaker_photo: StoredFile::from_name("keynotes/lin.jpg"),
        session_title: LocalizedText::new("開場", "Opening"),
        session_description: LocalizedText::new("說明", "Description"),
        session_slides: "https://slides.example.com/opening".to_string(),
        slido: "https://slido.example.com/opening".to_string(),
        youtube_id: "dQw4w9WgXcQ".to_string(),
        social_linkedin: String::new(),
        social_twitter: "https://twitter.com/lin".to_string(),
        social_github: "https://github.com/lin".to_string(),
    }
}

/// Speaker entry as it appears in list views
#[derive(Debug, Deserialize)]
pub struct ListSpeaker {
    pub thumbnail_url: String,
    pub name: String,
}

/// Event entry as it appears in list views
#[derive(Debug, Deserialize)]
pub struct ListItem {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub speakers: Vec<ListSpeaker>,
    pub event_type: String,
}

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
