//! # events-core
//!
//! Domain layer containing conference entities, value objects, and the repository port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    KeynoteEvent, Proposal, ProposedTalkEvent, ProposedTutorialEvent, SponsoredEvent, User,
};
pub use error::DomainError;
pub use traits::{EventRepository, RepoResult};
pub use value_objects::{
    ChoiceParseError, EventType, Language, LocalizedText, MediaUrls, ProposalKind, PythonLevel,
    RecordId, RecordIdParseError, StoredFile,
};
