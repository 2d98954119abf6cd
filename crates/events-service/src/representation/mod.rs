//! Event representations
//!
//! Talk and tutorial outputs are built as ordered JSON mappings: the event's
//! own fields plus a nested `proposal` mapping that is then flattened into the
//! top level. Sponsored and keynote outputs are typed response structs.

mod context;
mod error;
mod events;
mod flatten;
mod proposal;
mod responses;
mod speakers;

pub use context::RequestContext;
pub use error::RepresentationError;
pub use events::{
    represent_talk_detail, represent_talk_list_item, represent_tutorial_detail,
    represent_tutorial_list_item,
};
pub use flatten::{flatten_proposal, LIST_FIELDS, NESTED_FIELD};
pub use proposal::{build_proposal_representer, ProposalField, ProposalRepresenter, PROPOSAL_FIELDS};
pub use responses::{
    KeynoteEventResponse, KeynoteSessionResponse, KeynoteSocialResponse, KeynoteSpeakerResponse,
    SponsoredEventDetailResponse, SponsoredEventListResponse,
};
pub use speakers::{format_speakers, SpeakerDetails, SpeakerResponse};

/// An ordered string-keyed mapping serialized directly as a response body
pub type Representation = serde_json::Map<String, serde_json::Value>;
