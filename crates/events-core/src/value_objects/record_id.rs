//! Record ID - integer primary key of an externally owned record
//!
//! Records are created by the persistence layer; this crate only ever
//! reads them back by key, so the ID is a plain wrapper around the column value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary key of an event, proposal, or user row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a new RecordId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    ///
    /// Only non-negative decimal integers are accepted, the same shape an
    /// `<int:pk>` URL segment matches.
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordIdParseError::InvalidFormat);
        }
        s.parse::<i64>()
            .map(RecordId)
            .map_err(|_| RecordIdParseError::OutOfRange)
    }
}

/// Error when parsing a RecordId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid record id format")]
    InvalidFormat,

    #[error("record id out of range")]
    OutOfRange,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}
