//! # events-db
//!
//! Database layer implementing the event repository port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! The event, proposal and user tables are owned by another application.
//! This crate only reads them:
//!
//! - Connection pool management
//! - Row models with SQLx `FromRow` derives
//! - Row → entity mappers (choice codes are validated here)
//! - `PgEventRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use events_db::{create_pool, DatabaseConfig, PgEventRepository};
//! use events_core::EventRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let repo = PgEventRepository::new(pool);
//!
//!     let talks = repo.list_talk_events().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgEventRepository;
