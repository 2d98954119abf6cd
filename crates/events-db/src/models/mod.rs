//! Database models - SQLx-compatible structs for the event tables

mod event;
mod keynote;
mod proposal;
mod user;

pub use event::{SponsoredEventModel, TalkEventModel, TutorialEventModel};
pub use keynote::KeynoteEventModel;
pub use proposal::{ProposalModel, ProposalSpeakerModel};
pub use user::UserModel;
