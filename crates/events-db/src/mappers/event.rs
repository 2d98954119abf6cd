//! Event model -> entity mappers

use events_core::{
    DomainError, Proposal, ProposedTalkEvent, ProposedTutorialEvent, RecordId, SponsoredEvent,
    StoredFile, User,
};

use crate::models::{SponsoredEventModel, TalkEventModel, TutorialEventModel};

use super::parse_choice;

/// Attach the loaded proposal (if any) to a talk event row
pub fn talk_event_from_model(model: TalkEventModel, proposal: Option<Proposal>) -> ProposedTalkEvent {
    ProposedTalkEvent {
        id: RecordId::new(model.id),
        proposal,
        begin_time: model.begin_time,
        end_time: model.end_time,
        is_remote: model.is_remote,
        location: model.location,
    }
}

/// Attach the loaded proposal (if any) to a tutorial event row
pub fn tutorial_event_from_model(
    model: TutorialEventModel,
    proposal: Option<Proposal>,
) -> ProposedTutorialEvent {
    ProposedTutorialEvent {
        id: RecordId::new(model.id),
        proposal,
        begin_time: model.begin_time,
        end_time: model.end_time,
        is_remote: model.is_remote,
        location: model.location,
        registration_link: model.registration_link,
    }
}

/// Convert SponsoredEventModel to SponsoredEvent entity
impl TryFrom<SponsoredEventModel> for SponsoredEvent {
    type Error = DomainError;

    fn try_from(model: SponsoredEventModel) -> Result<Self, Self::Error> {
        Ok(SponsoredEvent {
            id: RecordId::new(model.id),
            host: User {
                id: RecordId::new(model.host_id),
                speaker_name: model.host_speaker_name,
                bio: model.host_bio,
                photo: StoredFile::from_name(model.host_photo),
                github_profile_url: model.host_github_profile_url,
                twitter_profile_url: model.host_twitter_profile_url,
                facebook_profile_url: model.host_facebook_profile_url,
            },
            title: model.title,
            category: model.category,
            language: parse_choice(&model.language)?,
            python_level: parse_choice(&model.python_level)?,
            recording_policy: model.recording_policy,
            abstract_text: model.abstract_text,
            detailed_description: model.detailed_description,
            slide_link: model.slide_link,
            slido_embed_link: model.slido_embed_link,
            location: model.location,
            begin_time: model.begin_time,
            end_time: model.end_time,
            remoting_policy: model.remoting_policy,
        })
    }
}
