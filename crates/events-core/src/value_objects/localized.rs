//! Two-locale text used by keynote records

use serde::{Deserialize, Serialize};

/// A value stored once in Traditional Chinese and once in English
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub zh_hant: String,
    pub en_us: String,
}

impl LocalizedText {
    pub fn new(zh_hant: impl Into<String>, en_us: impl Into<String>) -> Self {
        Self {
            zh_hant: zh_hant.into(),
            en_us: en_us.into(),
        }
    }
}
