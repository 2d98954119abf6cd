//! Error handling utilities for repositories

use events_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        // A column holding an unexpected type or NULL is a schema mismatch, not an outage
        SqlxError::ColumnDecode { .. } | SqlxError::ColumnNotFound(_) => {
            DomainError::data_integrity(e.to_string())
        }
        _ => DomainError::DatabaseError(e.to_string()),
    }
}
