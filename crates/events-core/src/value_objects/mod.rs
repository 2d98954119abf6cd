//! Value objects - immutable types that represent domain concepts

mod choices;
mod localized;
mod media;
mod record_id;

pub use choices::{ChoiceParseError, EventType, Language, ProposalKind, PythonLevel};
pub use localized::LocalizedText;
pub use media::{MediaUrls, StoredFile};
pub use record_id::{RecordId, RecordIdParseError};
