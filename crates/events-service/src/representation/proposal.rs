//! Proposal representer factory

use events_core::{EventType, Proposal, ProposalKind};
use serde_json::Value;

use super::context::RequestContext;
use super::error::RepresentationError;
use super::speakers::format_speakers;
use super::Representation;

/// A field of the proposal representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalField {
    Title,
    Category,
    Language,
    PythonLevel,
    RecordingPolicy,
    Abstract,
    DetailedDescription,
    SlideLink,
    SlidoEmbedLink,
    Speakers,
    EventType,
}

impl ProposalField {
    /// Output key
    pub const fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Language => "language",
            Self::PythonLevel => "python_level",
            Self::RecordingPolicy => "recording_policy",
            Self::Abstract => "abstract",
            Self::DetailedDescription => "detailed_description",
            Self::SlideLink => "slide_link",
            Self::SlidoEmbedLink => "slido_embed_link",
            Self::Speakers => "speakers",
            Self::EventType => "event_type",
        }
    }
}

/// Fields of every proposal representation, in output order
pub const PROPOSAL_FIELDS: &[ProposalField] = &[
    ProposalField::Title,
    ProposalField::Category,
    ProposalField::Language,
    ProposalField::PythonLevel,
    ProposalField::RecordingPolicy,
    ProposalField::Abstract,
    ProposalField::DetailedDescription,
    ProposalField::SlideLink,
    ProposalField::SlidoEmbedLink,
    ProposalField::Speakers,
    ProposalField::EventType,
];

/// Represents proposals of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalRepresenter {
    kind: ProposalKind,
    fields: &'static [ProposalField],
    show_speaker_details: bool,
}

/// Build the representer for an event type tag (`talk` or `tutorial`)
///
/// Any other tag is rejected here, before a record is ever represented.
pub fn build_proposal_representer(
    event_type: &str,
    show_speaker_details: bool,
) -> Result<ProposalRepresenter, RepresentationError> {
    let kind = event_type
        .parse::<ProposalKind>()
        .map_err(|e| RepresentationError::InvalidEventType(e.value))?;
    Ok(ProposalRepresenter::new(kind, show_speaker_details))
}

impl ProposalRepresenter {
    pub const fn new(kind: ProposalKind, show_speaker_details: bool) -> Self {
        Self {
            kind,
            fields: PROPOSAL_FIELDS,
            show_speaker_details,
        }
    }

    pub const fn kind(&self) -> ProposalKind {
        self.kind
    }

    pub const fn fields(&self) -> &'static [ProposalField] {
        self.fields
    }

    pub const fn show_speaker_details(&self) -> bool {
        self.show_speaker_details
    }

    /// Represent a proposal of this representer's kind
    pub fn represent(
        &self,
        ctx: &RequestContext,
        proposal: &Proposal,
    ) -> Result<Representation, RepresentationError> {
        if proposal.kind != self.kind {
            return Err(RepresentationError::ProposalKindMismatch {
                representer: self.kind,
                proposal: proposal.kind,
            });
        }

        let mut representation = Representation::new();
        for &field in self.fields {
            representation.insert(field.key().to_string(), self.field_value(field, ctx, proposal)?);
        }
        Ok(representation)
    }

    fn field_value(
        &self,
        field: ProposalField,
        ctx: &RequestContext,
        proposal: &Proposal,
    ) -> Result<Value, RepresentationError> {
        let value = match field {
            ProposalField::Title => Value::from(proposal.title.as_str()),
            ProposalField::Category => Value::from(proposal.category.as_str()),
            ProposalField::Language => Value::from(proposal.language.code()),
            ProposalField::PythonLevel => Value::from(proposal.python_level.code()),
            ProposalField::RecordingPolicy => Value::Bool(proposal.recording_policy),
            ProposalField::Abstract => Value::from(proposal.abstract_text.as_str()),
            ProposalField::DetailedDescription => {
                Value::from(proposal.detailed_description.as_str())
            }
            ProposalField::SlideLink => Value::from(proposal.slide_link.as_str()),
            ProposalField::SlidoEmbedLink => Value::from(proposal.slido_embed_link.as_str()),
            ProposalField::Speakers => serde_json::to_value(format_speakers(
                ctx,
                &proposal.speakers,
                self.show_speaker_details,
            )?)?,
            ProposalField::EventType => Value::from(EventType::from(self.kind).as_str()),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use events_core::{Language, MediaUrls, PythonLevel, RecordId, User};
    use std::sync::Arc;

    fn create_test_context() -> RequestContext {
        RequestContext::new("http", "testserver", "/api/events/talk/1", Arc::new(MediaUrls::default()))
            .unwrap()
    }

    fn create_test_proposal(kind: ProposalKind) -> Proposal {
        Proposal {
            id: RecordId::new(1),
            kind,
            title: "Intro to X".to_string(),
            category: "PyData".to_string(),
            language: Language::EnglishEnglish,
            python_level: PythonLevel::Novice,
            recording_policy: true,
            abstract_text: "Short".to_string(),
            detailed_description: "Long".to_string(),
            slide_link: "https://slides.example.com/x".to_string(),
            slido_embed_link: String::new(),
            speakers: vec![
                User::new(RecordId::new(10), "Ada"),
                User::new(RecordId::new(11), "Grace"),
            ],
        }
    }

    #[test]
    fn test_talk_representer() {
        let representer = build_proposal_representer("talk", false).unwrap();
        let representation = representer
            .represent(&create_test_context(), &create_test_proposal(ProposalKind::Talk))
            .unwrap();

        assert_eq!(representation["event_type"], "talk");
        assert_eq!(representation["title"], "Intro to X");
        assert_eq!(representation["category"], "PyData");
        assert_eq!(representation["language"], "ENEN");
        assert_eq!(representation["python_level"], "NOVICE");
        assert_eq!(representation["slide_link"], "https://slides.example.com/x");
        assert_eq!(representation["slido_embed_link"], "");
        assert_eq!(representation["speakers"].as_array().unwrap().len(), 2);
        assert_eq!(representation["speakers"][1]["name"], "Grace");
    }

    #[test]
    fn test_field_order() {
        let representer = build_proposal_representer("tutorial", true).unwrap();
        let representation = representer
            .represent(&create_test_context(), &create_test_proposal(ProposalKind::Tutorial))
            .unwrap();

        let keys: Vec<_> = representation.keys().map(String::as_str).collect();
        let expected: Vec<_> = PROPOSAL_FIELDS.iter().map(|f| f.key()).collect();
        assert_eq!(keys, expected);
        assert_eq!(representation["event_type"], "tutorial");
        assert!(representation["speakers"][0].get("bio").is_some());
    }

    #[test]
    fn test_invalid_event_type_fails_at_construction() {
        let err = build_proposal_representer("webinar", true).unwrap_err();
        assert!(matches!(err, RepresentationError::InvalidEventType(ref t) if t == "webinar"));

        assert!(build_proposal_representer("sponsored", false).is_err());
        assert!(build_proposal_representer("Talk", false).is_err());
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let representer = ProposalRepresenter::new(ProposalKind::Talk, false);
        let err = representer
            .represent(&create_test_context(), &create_test_proposal(ProposalKind::Tutorial))
            .unwrap_err();
        assert!(matches!(
            err,
            RepresentationError::ProposalKindMismatch {
                representer: ProposalKind::Talk,
                proposal: ProposalKind::Tutorial,
            }
        ));
    }
}
