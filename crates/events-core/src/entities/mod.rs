//! Domain entities - conference records as this service reads them

mod event;
mod keynote;
mod proposal;
mod user;

pub use event::{ProposedTalkEvent, ProposedTutorialEvent, SponsoredEvent};
pub use keynote::KeynoteEvent;
pub use proposal::Proposal;
pub use user::User;
