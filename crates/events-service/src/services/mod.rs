//! Read services
//!
//! Services load records through the repository port and apply the
//! representers to them.

pub mod context;
pub mod error;
pub mod event;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
