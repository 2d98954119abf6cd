//! Repository implementations - PostgreSQL adapters for the repository ports

mod error;
mod event;

pub use event::PgEventRepository;
