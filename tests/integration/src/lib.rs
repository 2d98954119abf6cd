//! Integration test utilities for the conference events API
//!
//! Serves the real router over TCP, backed by an in-memory repository
//! seeded with a small conference program.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
