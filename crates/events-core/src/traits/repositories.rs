//! Repository traits (ports) - define the interface for data access
//!
//! Event, proposal and speaker rows are owned by an external persistence
//! layer. The domain only needs to read fully materialized records by key;
//! the infrastructure layer decides how they are loaded.

use async_trait::async_trait;

use crate::entities::{
    KeynoteEvent, ProposedTalkEvent, ProposedTutorialEvent, SponsoredEvent,
};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Read access to scheduled events
///
/// Talk and tutorial events are returned with their proposal and the
/// proposal's speakers already loaded, speakers in association order.
/// List operations return records ordered by id.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find a talk event by ID
    async fn find_talk_event(&self, id: RecordId) -> RepoResult<Option<ProposedTalkEvent>>;

    /// List all talk events
    async fn list_talk_events(&self) -> RepoResult<Vec<ProposedTalkEvent>>;

    /// Find a tutorial event by ID
    async fn find_tutorial_event(&self, id: RecordId)
        -> RepoResult<Option<ProposedTutorialEvent>>;

    /// List all tutorial events
    async fn list_tutorial_events(&self) -> RepoResult<Vec<ProposedTutorialEvent>>;

    /// Find a sponsored event by ID
    async fn find_sponsored_event(&self, id: RecordId) -> RepoResult<Option<SponsoredEvent>>;

    /// List all sponsored events
    async fn list_sponsored_events(&self) -> RepoResult<Vec<SponsoredEvent>>;

    /// List all keynote events
    async fn list_keynote_events(&self) -> RepoResult<Vec<KeynoteEvent>>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}
