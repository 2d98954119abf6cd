//! Event service
//!
//! Loads scheduled events and builds their representations.

use events_core::{DomainError, RecordId};
use tracing::{debug, instrument};

use crate::representation::{
    represent_talk_detail, represent_talk_list_item, represent_tutorial_detail,
    represent_tutorial_list_item, KeynoteEventResponse, Representation, RequestContext,
    SponsoredEventDetailResponse, SponsoredEventListResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a talk with every proposal field and speaker details
    #[instrument(skip(self, request), fields(host = %request.host()))]
    pub async fn talk_detail(
        &self,
        id: RecordId,
        request: &RequestContext,
    ) -> ServiceResult<Representation> {
        let event = self
            .ctx
            .event_repo()
            .find_talk_event(id)
            .await?
            .ok_or(DomainError::TalkNotFound(id))?;

        Ok(represent_talk_detail(request, &event)?)
    }

    /// Get a tutorial with every proposal field and speaker details
    #[instrument(skip(self, request), fields(host = %request.host()))]
    pub async fn tutorial_detail(
        &self,
        id: RecordId,
        request: &RequestContext,
    ) -> ServiceResult<Representation> {
        let event = self
            .ctx
            .event_repo()
            .find_tutorial_event(id)
            .await?
            .ok_or(DomainError::TutorialNotFound(id))?;

        Ok(represent_tutorial_detail(request, &event)?)
    }

    /// List talks in id order
    #[instrument(skip(self, request))]
    pub async fn list_talks(&self, request: &RequestContext) -> ServiceResult<Vec<Representation>> {
        let events = self.ctx.event_repo().list_talk_events().await?;

        let items = events
            .iter()
            .map(|event| represent_talk_list_item(request, event))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "Represented talks");
        Ok(items)
    }

    /// List tutorials in id order
    #[instrument(skip(self, request))]
    pub async fn list_tutorials(
        &self,
        request: &RequestContext,
    ) -> ServiceResult<Vec<Representation>> {
        let events = self.ctx.event_repo().list_tutorial_events().await?;

        let items = events
            .iter()
            .map(|event| represent_tutorial_list_item(request, event))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "Represented tutorials");
        Ok(items)
    }

    /// Get a sponsored event with host details
    #[instrument(skip(self, request), fields(host = %request.host()))]
    pub async fn sponsored_detail(
        &self,
        id: RecordId,
        request: &RequestContext,
    ) -> ServiceResult<SponsoredEventDetailResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_sponsored_event(id)
            .await?
            .ok_or(DomainError::SponsoredEventNotFound(id))?;

        Ok(SponsoredEventDetailResponse::new(request, &event)?)
    }

    /// List sponsored events in id order
    #[instrument(skip(self, request))]
    pub async fn list_sponsored(
        &self,
        request: &RequestContext,
    ) -> ServiceResult<Vec<SponsoredEventListResponse>> {
        let events = self.ctx.event_repo().list_sponsored_events().await?;

        let items = events
            .iter()
            .map(|event| SponsoredEventListResponse::new(request, event))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "Represented sponsored events");
        Ok(items)
    }

    /// List keynotes in id order
    #[instrument(skip(self, request))]
    pub async fn list_keynotes(
        &self,
        request: &RequestContext,
    ) -> ServiceResult<Vec<KeynoteEventResponse>> {
        let events = self.ctx.event_repo().list_keynote_events().await?;

        let items = events
            .iter()
            .map(|event| KeynoteEventResponse::new(request.media(), event))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "Represented keynotes");
        Ok(items)
    }

    /// Check that event records can be read
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> ServiceResult<()> {
        Ok(self.ctx.event_repo().health_check().await?)
    }
}
