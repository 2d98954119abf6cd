//! Event handlers
//!
//! Read-only endpoints for talks, tutorials, sponsored events and keynotes.

use axum::{extract::State, Json};
use events_service::representation::{
    KeynoteEventResponse, SponsoredEventDetailResponse, SponsoredEventListResponse,
};
use events_service::{EventService, Representation};

use crate::extractors::{EventIdPath, ValidPath, WithRequestContext};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a talk
///
/// GET /api/events/talk/{id}
pub async fn get_talk(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<EventIdPath>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<Representation>> {
    let id = path.id()?;

    let service = EventService::new(state.service_context());
    let response = service.talk_detail(id, &request).await?;
    Ok(Json(response))
}

/// Get a tutorial
///
/// GET /api/events/tutorial/{id}
pub async fn get_tutorial(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<EventIdPath>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<Representation>> {
    let id = path.id()?;

    let service = EventService::new(state.service_context());
    let response = service.tutorial_detail(id, &request).await?;
    Ok(Json(response))
}

/// List talks
///
/// GET /api/events/talks
pub async fn list_talks(
    State(state): State<AppState>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<Vec<Representation>>> {
    let service = EventService::new(state.service_context());
    let response = service.list_talks(&request).await?;
    Ok(Json(response))
}

/// List tutorials
///
/// GET /api/events/tutorials
pub async fn list_tutorials(
    State(state): State<AppState>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<Vec<Representation>>> {
    let service = EventService::new(state.service_context());
    let response = service.list_tutorials(&request).await?;
    Ok(Json(response))
}

/// Get a sponsored event
///
/// GET /api/events/sponsored/{id}
pub async fn get_sponsored(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<EventIdPath>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<SponsoredEventDetailResponse>> {
    let id = path.id()?;

    let service = EventService::new(state.service_context());
    let response = service.sponsored_detail(id, &request).await?;
    Ok(Json(response))
}

/// List sponsored events
///
/// GET /api/events/sponsored
pub async fn list_sponsored(
    State(state): State<AppState>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<Vec<SponsoredEventListResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.list_sponsored(&request).await?;
    Ok(Json(response))
}

/// List keynotes
///
/// GET /api/events/keynotes
pub async fn list_keynotes(
    State(state): State<AppState>,
    WithRequestContext(request): WithRequestContext,
) -> ApiResult<Json<Vec<KeynoteEventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.list_keynotes(&request).await?;
    Ok(Json(response))
}
