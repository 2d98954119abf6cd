//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Talk not found: {0}")]
    TalkNotFound(RecordId),

    #[error("Tutorial not found: {0}")]
    TutorialNotFound(RecordId),

    #[error("Sponsored event not found: {0}")]
    SponsoredEventNotFound(RecordId),

    // =========================================================================
    // Data Integrity Errors
    // =========================================================================
    /// A stored value could not be resolved into its domain shape
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::TalkNotFound(_) => "UNKNOWN_TALK",
            Self::TutorialNotFound(_) => "UNKNOWN_TUTORIAL",
            Self::SponsoredEventNotFound(_) => "UNKNOWN_SPONSORED_EVENT",
            Self::DataIntegrity(_) => "DATA_INTEGRITY_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TalkNotFound(_) | Self::TutorialNotFound(_) | Self::SponsoredEventNotFound(_)
        )
    }

    /// Create a data integrity error
    pub fn data_integrity(msg: impl Into<String>) -> Self {
        Self::DataIntegrity(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::TalkNotFound(RecordId::new(1));
        assert_eq!(err.code(), "UNKNOWN_TALK");

        let err = DomainError::data_integrity("bad language");
        assert_eq!(err.code(), "DATA_INTEGRITY_ERROR");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::TalkNotFound(RecordId::new(1)).is_not_found());
        assert!(DomainError::TutorialNotFound(RecordId::new(1)).is_not_found());
        assert!(DomainError::SponsoredEventNotFound(RecordId::new(1)).is_not_found());
        assert!(!DomainError::DatabaseError("down".to_string()).is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TutorialNotFound(RecordId::new(7));
        assert_eq!(err.to_string(), "Tutorial not found: 7");
    }
}
