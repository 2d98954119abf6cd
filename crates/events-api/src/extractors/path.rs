//! Path parameter extractors
//!
//! Type-safe extraction of record IDs from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use events_core::RecordId;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Extract path parameters, rejecting malformed ones with a 400
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(ValidPath(inner))
    }
}

/// Path parameters with an event id
#[derive(Debug, serde::Deserialize)]
pub struct EventIdPath {
    pub id: String,
}

impl EventIdPath {
    /// Parse id as RecordId
    pub fn id(&self) -> Result<RecordId, ApiError> {
        RecordId::parse(&self.id).map_err(|_| ApiError::invalid_path("Invalid event id format"))
    }
}
