//! Route definitions
//!
//! Event routes are mounted under /api/events; health probes sit at the root.

use axum::{routing::get, Router};

use crate::handlers::{events, health};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/events", event_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/talk/:id", get(events::get_talk))
        .route("/tutorial/:id", get(events::get_tutorial))
        .route("/talks", get(events::list_talks))
        .route("/tutorials", get(events::list_tutorials))
        .route("/sponsored", get(events::list_sponsored))
        .route("/sponsored/:id", get(events::get_sponsored))
        .route("/keynotes", get(events::list_keynotes))
}
