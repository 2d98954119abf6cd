//! Scheduled event entities backed by proposals or sponsors

use chrono::{DateTime, Utc};

use crate::entities::{Proposal, User};
use crate::value_objects::{Language, PythonLevel, RecordId};

/// A talk slot on the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedTalkEvent {
    pub id: RecordId,
    /// `None` only when the storage row points at a missing proposal
    pub proposal: Option<Proposal>,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_remote: bool,
    pub location: String,
}

/// A tutorial slot on the schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedTutorialEvent {
    pub id: RecordId,
    pub proposal: Option<Proposal>,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_remote: bool,
    pub location: String,
    pub registration_link: String,
}

/// A sponsor session; the content lives on the event itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsoredEvent {
    pub id: RecordId,
    pub host: User,
    pub title: String,
    pub category: String,
    pub language: Language,
    pub python_level: PythonLevel,
    pub recording_policy: bool,
    pub abstract_text: String,
    pub detailed_description: String,
    pub slide_link: String,
    pub slido_embed_link: String,
    pub location: String,
    pub begin_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub remoting_policy: String,
}
