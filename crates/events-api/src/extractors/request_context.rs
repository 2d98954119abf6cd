//! Request context extractor
//!
//! Captures the scheme, host and path representations resolve URLs against.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, OriginalUri},
    http::request::Parts,
};
use axum_extra::{headers::Host, TypedHeader};
use events_service::RequestContext;

use crate::response::ApiError;
use crate::state::AppState;

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Request context for the current request
#[derive(Debug, Clone)]
pub struct WithRequestContext(pub RequestContext);

#[async_trait]
impl<S> FromRequestParts<S> for WithRequestContext
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let trust_proxy = app_state.config().api.trust_proxy_headers;

        // Nested routers see a stripped URI; the original keeps the full path
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.clone(), |original| original.0.clone());

        let forwarded_host = if trust_proxy {
            first_forwarded_value(parts, X_FORWARDED_HOST)
        } else {
            None
        };
        let host = match forwarded_host {
            Some(host) => host,
            None => match TypedHeader::<Host>::from_request_parts(parts, state).await {
                Ok(TypedHeader(host)) => host.to_string(),
                Err(_) => uri
                    .authority()
                    .map(ToString::to_string)
                    .ok_or(ApiError::MissingHost)?,
            },
        };

        let forwarded_proto = if trust_proxy {
            first_forwarded_value(parts, X_FORWARDED_PROTO)
        } else {
            None
        };
        let scheme = forwarded_proto
            .or_else(|| uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());

        RequestContext::new(&scheme, &host, uri.path(), app_state.media())
            .map(WithRequestContext)
            .map_err(|_| ApiError::InvalidHost(host))
    }
}

/// First entry of a comma-separated proxy header, if present and non-empty
fn first_forwarded_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
