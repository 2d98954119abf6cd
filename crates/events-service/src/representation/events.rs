//! Talk and tutorial event representers

use chrono::{DateTime, Utc};
use events_core::{
    EventType, Proposal, ProposalKind, ProposedTalkEvent, ProposedTutorialEvent, RecordId,
};
use serde_json::Value;

use super::context::RequestContext;
use super::error::RepresentationError;
use super::flatten::{flatten_proposal, LIST_FIELDS, NESTED_FIELD};
use super::proposal::ProposalRepresenter;
use super::Representation;

/// Which flavor of representation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Detail,
    List,
}

impl View {
    const fn show_speaker_details(self) -> bool {
        matches!(self, Self::Detail)
    }

    const fn allow_fields(self) -> &'static [&'static str] {
        match self {
            Self::Detail => &[],
            Self::List => LIST_FIELDS,
        }
    }
}

/// Talk detail: schedule fields plus every proposal field
pub fn represent_talk_detail(
    ctx: &RequestContext,
    event: &ProposedTalkEvent,
) -> Result<Representation, RepresentationError> {
    let representation = schedule_fields(
        event.id,
        event.begin_time,
        event.end_time,
        event.is_remote,
        &event.location,
    )?;
    represent_proposed(
        ctx,
        representation,
        ProposalKind::Talk,
        event.id,
        event.proposal.as_ref(),
        View::Detail,
    )
}

/// Talk list item: id plus the list proposal fields
pub fn represent_talk_list_item(
    ctx: &RequestContext,
    event: &ProposedTalkEvent,
) -> Result<Representation, RepresentationError> {
    represent_proposed(
        ctx,
        id_field(event.id)?,
        ProposalKind::Talk,
        event.id,
        event.proposal.as_ref(),
        View::List,
    )
}

/// Tutorial detail: schedule fields, registration link, every proposal field
pub fn represent_tutorial_detail(
    ctx: &RequestContext,
    event: &ProposedTutorialEvent,
) -> Result<Representation, RepresentationError> {
    let mut representation = schedule_fields(
        event.id,
        event.begin_time,
        event.end_time,
        event.is_remote,
        &event.location,
    )?;
    representation.insert(
        "registration_link".to_string(),
        Value::from(event.registration_link.as_str()),
    );
    represent_proposed(
        ctx,
        representation,
        ProposalKind::Tutorial,
        event.id,
        event.proposal.as_ref(),
        View::Detail,
    )
}

/// Tutorial list item: id plus the list proposal fields
pub fn represent_tutorial_list_item(
    ctx: &RequestContext,
    event: &ProposedTutorialEvent,
) -> Result<Representation, RepresentationError> {
    represent_proposed(
        ctx,
        id_field(event.id)?,
        ProposalKind::Tutorial,
        event.id,
        event.proposal.as_ref(),
        View::List,
    )
}

fn id_field(id: RecordId) -> Result<Representation, RepresentationError> {
    let mut representation = Representation::new();
    representation.insert("id".to_string(), serde_json::to_value(id)?);
    Ok(representation)
}

fn schedule_fields(
    id: RecordId,
    begin_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    is_remote: bool,
    location: &str,
) -> Result<Representation, RepresentationError> {
    let mut representation = id_field(id)?;
    representation.insert("begin_time".to_string(), serde_json::to_value(begin_time)?);
    representation.insert("end_time".to_string(), serde_json::to_value(end_time)?);
    representation.insert("is_remote".to_string(), Value::Bool(is_remote));
    representation.insert("location".to_string(), Value::from(location));
    Ok(representation)
}

fn represent_proposed(
    ctx: &RequestContext,
    mut representation: Representation,
    kind: ProposalKind,
    id: RecordId,
    proposal: Option<&Proposal>,
    view: View,
) -> Result<Representation, RepresentationError> {
    let proposal = proposal.ok_or(RepresentationError::MissingProposal {
        event_type: EventType::from(kind),
        id,
    })?;

    let representer = ProposalRepresenter::new(kind, view.show_speaker_details());
    representation.insert(
        NESTED_FIELD.to_string(),
        Value::Object(representer.represent(ctx, proposal)?),
    );
    flatten_proposal(representation, view.allow_fields())
}
