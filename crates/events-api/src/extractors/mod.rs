//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and the request context.

mod path;
mod request_context;

pub use path::{EventIdPath, ValidPath};
pub use request_context::WithRequestContext;
