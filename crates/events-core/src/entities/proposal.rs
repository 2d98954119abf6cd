//! Proposal entity - the accepted talk or tutorial behind a scheduled event

use crate::entities::User;
use crate::value_objects::{Language, ProposalKind, PythonLevel, RecordId};

/// Talk or tutorial proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub id: RecordId,
    pub kind: ProposalKind,
    pub title: String,
    pub category: String,
    pub language: Language,
    pub python_level: PythonLevel,
    pub recording_policy: bool,
    pub abstract_text: String,
    pub detailed_description: String,
    /// Stored as entered; blank when the speaker gave no link
    pub slide_link: String,
    pub slido_embed_link: String,
    /// Submitter first, then additional speakers in association order
    pub speakers: Vec<User>,
}
