//! Model to entity mappers
//!
//! Conversions from database rows to domain entities (events-core).
//! - `From<Model> for Entity` where every column maps directly
//! - `TryFrom<Model> for Entity` where choice codes must be validated

mod event;
mod keynote;
mod proposal;
mod user;

pub use event::{talk_event_from_model, tutorial_event_from_model};
pub use proposal::proposal_from_model;

use std::str::FromStr;

use events_core::{ChoiceParseError, DomainError};

/// Parse a stored choice code, reporting unknown codes as a data integrity error
pub(crate) fn parse_choice<T>(raw: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = ChoiceParseError>,
{
    raw.parse()
        .map_err(|e: ChoiceParseError| DomainError::data_integrity(e.to_string()))
}
