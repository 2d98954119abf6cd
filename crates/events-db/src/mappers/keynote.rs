//! Keynote model -> entity mapper

use events_core::{KeynoteEvent, LocalizedText, RecordId, StoredFile};

use crate::models::KeynoteEventModel;

/// Convert KeynoteEventModel to KeynoteEvent entity
impl From<KeynoteEventModel> for KeynoteEvent {
    fn from(model: KeynoteEventModel) -> Self {
        KeynoteEvent {
            id: RecordId::new(model.id),
            speaker_name: LocalizedText::new(model.speaker_name_zh_hant, model.speaker_name_en_us),
            speaker_bio: LocalizedText::new(model.speaker_bio_zh_hant, model.speaker_bio_en_us),
            speaker_photo: StoredFile::from_name(model.speaker_photo),
            session_title: LocalizedText::new(
                model.session_title_zh_hant,
                model.session_title_en_us,
            ),
            session_description: LocalizedText::new(
                model.session_description_zh_hant,
                model.session_description_en_us,
            ),
            session_slides: model.session_slides,
            slido: model.slido,
            youtube_id: model.youtube_id,
            social_linkedin: model.social_linkedin,
            social_twitter: model.social_twitter,
            social_github: model.social_github,
        }
    }
}
