//! Representation errors

use events_core::{EventType, ProposalKind, RecordId};
use thiserror::Error;

/// Errors raised while building a representation
///
/// None of these are recoverable at request time: they describe either a
/// misconfigured representer or a record that lacks data it must carry.
#[derive(Debug, Error)]
pub enum RepresentationError {
    /// Representer requested for an event type with no proposal entity behind it
    #[error("invalid event type: {0:?}")]
    InvalidEventType(String),

    #[error("{representer} proposal representer cannot represent a {proposal} proposal")]
    ProposalKindMismatch {
        representer: ProposalKind,
        proposal: ProposalKind,
    },

    #[error("representation has no nested field {0:?}")]
    MissingNestedField(&'static str),

    #[error("nested field {0:?} is not a mapping")]
    NestedFieldNotAMapping(&'static str),

    #[error("{event_type} event {id} has no proposal")]
    MissingProposal { event_type: EventType, id: RecordId },

    #[error("{entity} {id} has no {attribute}")]
    MissingAttribute {
        entity: &'static str,
        id: RecordId,
        attribute: &'static str,
    },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to serialize representation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RepresentationError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEventType(_) | Self::ProposalKindMismatch { .. } => {
                "REPRESENTER_CONFIGURATION_ERROR"
            }
            Self::MissingNestedField(_) | Self::NestedFieldNotAMapping(_) => "MISSING_NESTED_FIELD",
            Self::MissingProposal { .. } | Self::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
