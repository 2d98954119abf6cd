//! Proposal database models

use sqlx::FromRow;

use super::UserModel;

/// Database model for proposals_talkproposal / proposals_tutorialproposal tables
#[derive(Debug, Clone, FromRow)]
pub struct ProposalModel {
    pub id: i64,
    pub submitter_id: i64,
    pub title: String,
    pub category: String,
    pub language: String,
    pub python_level: String,
    pub recording_policy: bool,
    pub abstract_text: String,
    pub detailed_description: String,
    pub slide_link: String,
    pub slido_embed_link: String,
}

/// A speaker row joined from users_user, tagged with the proposal it belongs to
#[derive(Debug, Clone, FromRow)]
pub struct ProposalSpeakerModel {
    pub proposal_id: i64,
    #[sqlx(flatten)]
    pub user: UserModel,
}
