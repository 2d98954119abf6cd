//! Proposal model -> entity mapper

use events_core::{DomainError, Proposal, ProposalKind, RecordId, User};

use crate::models::{ProposalModel, ProposalSpeakerModel};

use super::parse_choice;

/// Build a Proposal from its row and its speaker rows
///
/// `speakers` must already be in association order (submitter first).
pub fn proposal_from_model(
    kind: ProposalKind,
    model: ProposalModel,
    speakers: Vec<ProposalSpeakerModel>,
) -> Result<Proposal, DomainError> {
    Ok(Proposal {
        id: RecordId::new(model.id),
        kind,
        title: model.title,
        category: model.category,
        language: parse_choice(&model.language)?,
        python_level: parse_choice(&model.python_level)?,
        recording_policy: model.recording_policy,
        abstract_text: model.abstract_text,
        detailed_description: model.detailed_description,
        slide_link: model.slide_link,
        slido_embed_link: model.slido_embed_link,
        speakers: speakers.into_iter().map(|s| User::from(s.user)).collect(),
    })
}
