//! Proposal flattener

use serde_json::Value;

use super::error::RepresentationError;
use super::Representation;

/// Key holding the nested proposal mapping
pub const NESTED_FIELD: &str = "proposal";

/// Proposal keys surfaced in list views
pub const LIST_FIELDS: &[&str] = &["title", "category", "speakers", "event_type"];

/// Lift the nested `proposal` mapping into the top level
///
/// The result holds the parent's remaining keys in their original order,
/// followed by the nested keys in nested order. An empty `allow_fields`
/// surfaces every nested key; otherwise keys not listed are dropped. A nested
/// key equal to a parent key replaces the parent's value in place.
pub fn flatten_proposal(
    representation: Representation,
    allow_fields: &[&str],
) -> Result<Representation, RepresentationError> {
    let mut flattened = Representation::new();
    let mut nested = None;

    for (key, value) in representation {
        if key == NESTED_FIELD {
            nested = Some(value);
        } else {
            flattened.insert(key, value);
        }
    }

    let nested = match nested {
        Some(Value::Object(map)) => map,
        Some(_) => return Err(RepresentationError::NestedFieldNotAMapping(NESTED_FIELD)),
        None => return Err(RepresentationError::MissingNestedField(NESTED_FIELD)),
    };

    for (key, value) in nested {
        if allow_fields.is_empty() || allow_fields.contains(&key.as_str()) {
            flattened.insert(key, value);
        }
    }
    Ok(flattened)
}
