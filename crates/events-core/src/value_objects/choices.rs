//! Choice fields - closed sets of codes stored on proposals and events

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error when a stored or configured code is not part of its choice set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {value:?}")]
pub struct ChoiceParseError {
    pub field: &'static str,
    pub value: String,
}

impl ChoiceParseError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Proposal Kind
// ============================================================================

/// Which proposal entity backs a proposed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalKind {
    Talk,
    Tutorial,
}

impl ProposalKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Talk => "talk",
            Self::Tutorial => "tutorial",
        }
    }
}

impl FromStr for ProposalKind {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "talk" => Ok(Self::Talk),
            "tutorial" => Ok(Self::Tutorial),
            _ => Err(ChoiceParseError::new("event type", s)),
        }
    }
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Event Type
// ============================================================================

/// The `event_type` tag emitted in event representations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Talk,
    Tutorial,
    Sponsored,
}

impl EventType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Talk => "talk",
            Self::Tutorial => "tutorial",
            Self::Sponsored => "sponsored",
        }
    }
}

impl From<ProposalKind> for EventType {
    fn from(kind: ProposalKind) -> Self {
        match kind {
            ProposalKind::Talk => Self::Talk,
            ProposalKind::Tutorial => Self::Tutorial,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Language
// ============================================================================

/// Spoken language / slide language combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English talk
    #[serde(rename = "ENEN")]
    EnglishEnglish,
    /// Chinese talk w. English slides
    #[serde(rename = "ZHEN")]
    ChineseEnglish,
    /// Chinese talk w. Chinese slides
    #[serde(rename = "ZHZH")]
    ChineseChinese,
    /// Taiwanese Hokkien
    #[serde(rename = "TAI")]
    Taiwanese,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::EnglishEnglish => "ENEN",
            Self::ChineseEnglish => "ZHEN",
            Self::ChineseChinese => "ZHZH",
            Self::Taiwanese => "TAI",
        }
    }
}

impl FromStr for Language {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENEN" => Ok(Self::EnglishEnglish),
            "ZHEN" => Ok(Self::ChineseEnglish),
            "ZHZH" => Ok(Self::ChineseChinese),
            "TAI" => Ok(Self::Taiwanese),
            _ => Err(ChoiceParseError::new("language", s)),
        }
    }
}

// ============================================================================
// Python Level
// ============================================================================

/// Experience level the audience is expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PythonLevel {
    Novice,
    Intermediate,
    Experienced,
}

impl PythonLevel {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Novice => "NOVICE",
            Self::Intermediate => "INTERMEDIATE",
            Self::Experienced => "EXPERIENCED",
        }
    }
}

impl FromStr for PythonLevel {
    type Err = ChoiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOVICE" => Ok(Self::Novice),
            "INTERMEDIATE" => Ok(Self::Intermediate),
            "EXPERIENCED" => Ok(Self::Experienced),
            _ => Err(ChoiceParseError::new("python level", s)),
        }
    }
}
