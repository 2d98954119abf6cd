//! PostgreSQL implementation of EventRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use events_core::{
    EventRepository, KeynoteEvent, Proposal, ProposalKind, ProposedTalkEvent,
    ProposedTutorialEvent, RecordId, RepoResult, SponsoredEvent,
};

use crate::mappers::{proposal_from_model, talk_event_from_model, tutorial_event_from_model};
use crate::models::{
    KeynoteEventModel, ProposalModel, ProposalSpeakerModel, SponsoredEventModel, TalkEventModel,
    TutorialEventModel,
};

use super::error::map_db_error;

const TALK_EVENT_COLUMNS: &str =
    "id, proposal_id, begin_time, end_time, is_remote, location";

const TUTORIAL_EVENT_COLUMNS: &str =
    "id, proposal_id, begin_time, end_time, is_remote, location, registration_link";

const SPONSORED_EVENT_SELECT: &str = r"
    SELECT e.id, e.title, e.category, e.language, e.python_level, e.recording_policy,
           e.abstract AS abstract_text, e.detailed_description, e.slide_link,
           e.slido_embed_link, e.location, e.begin_time, e.end_time, e.remoting_policy,
           u.id AS host_id, u.speaker_name AS host_speaker_name, u.bio AS host_bio,
           u.photo AS host_photo, u.github_profile_url AS host_github_profile_url,
           u.twitter_profile_url AS host_twitter_profile_url,
           u.facebook_profile_url AS host_facebook_profile_url
    FROM events_sponsoredevent e
    JOIN users_user u ON u.id = e.host_id
";

/// Proposal table backing each proposal kind
const fn proposal_table(kind: ProposalKind) -> &'static str {
    match kind {
        ProposalKind::Talk => "proposals_talkproposal",
        ProposalKind::Tutorial => "proposals_tutorialproposal",
    }
}

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load proposals of one kind together with their speakers, keyed by proposal id
    #[instrument(skip(self))]
    async fn load_proposals(
        &self,
        kind: ProposalKind,
        ids: &[i64],
    ) -> RepoResult<HashMap<i64, Proposal>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let table = proposal_table(kind);

        let proposals = sqlx::query_as::<_, ProposalModel>(&format!(
            r"
            SELECT id, submitter_id, title, category, language, python_level, recording_policy,
                   abstract AS abstract_text, detailed_description, slide_link, slido_embed_link
            FROM {table}
            WHERE id = ANY($1)
            "
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // Submitter first, then non-cancelled additional speakers in id order
        let speaker_rows = sqlx::query_as::<_, ProposalSpeakerModel>(&format!(
            r"
            SELECT proposal_id, id, speaker_name, bio, photo,
                   github_profile_url, twitter_profile_url, facebook_profile_url
            FROM (
                SELECT p.id AS proposal_id, 0::BIGINT AS seq,
                       u.id, u.speaker_name, u.bio, u.photo, u.github_profile_url,
                       u.twitter_profile_url, u.facebook_profile_url
                FROM {table} p
                JOIN users_user u ON u.id = p.submitter_id
                WHERE p.id = ANY($1)
                UNION ALL
                SELECT s.proposal_id, s.id,
                       u.id, u.speaker_name, u.bio, u.photo, u.github_profile_url,
                       u.twitter_profile_url, u.facebook_profile_url
                FROM proposals_additionalspeaker s
                JOIN users_user u ON u.id = s.user_id
                WHERE s.proposal_kind = $2 AND s.proposal_id = ANY($1) AND NOT s.cancelled
            ) speakers
            ORDER BY proposal_id, seq
            "
        ))
        .bind(ids)
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut speakers: HashMap<i64, Vec<ProposalSpeakerModel>> = HashMap::new();
        for row in speaker_rows {
            speakers.entry(row.proposal_id).or_default().push(row);
        }

        let mut loaded = HashMap::with_capacity(proposals.len());
        for model in proposals {
            let id = model.id;
            let rows = speakers.remove(&id).unwrap_or_default();
            loaded.insert(id, proposal_from_model(kind, model, rows)?);
        }
        debug!(kind = %kind, count = loaded.len(), "Loaded proposals");
        Ok(loaded)
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_talk_event(&self, id: RecordId) -> RepoResult<Option<ProposedTalkEvent>> {
        let model = sqlx::query_as::<_, TalkEventModel>(&format!(
            "SELECT {TALK_EVENT_COLUMNS} FROM events_proposedtalkevent WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };
        let mut proposals = self
            .load_proposals(ProposalKind::Talk, &[model.proposal_id])
            .await?;
        let proposal = proposals.remove(&model.proposal_id);
        Ok(Some(talk_event_from_model(model, proposal)))
    }

    #[instrument(skip(self))]
    async fn list_talk_events(&self) -> RepoResult<Vec<ProposedTalkEvent>> {
        let models = sqlx::query_as::<_, TalkEventModel>(&format!(
            "SELECT {TALK_EVENT_COLUMNS} FROM events_proposedtalkevent ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = models.iter().map(|m| m.proposal_id).collect();
        let proposals = self.load_proposals(ProposalKind::Talk, &ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let proposal = proposals.get(&m.proposal_id).cloned();
                talk_event_from_model(m, proposal)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_tutorial_event(
        &self,
        id: RecordId,
    ) -> RepoResult<Option<ProposedTutorialEvent>> {
        let model = sqlx::query_as::<_, TutorialEventModel>(&format!(
            "SELECT {TUTORIAL_EVENT_COLUMNS} FROM events_proposedtutorialevent WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };
        let mut proposals = self
            .load_proposals(ProposalKind::Tutorial, &[model.proposal_id])
            .await?;
        let proposal = proposals.remove(&model.proposal_id);
        Ok(Some(tutorial_event_from_model(model, proposal)))
    }

    #[instrument(skip(self))]
    async fn list_tutorial_events(&self) -> RepoResult<Vec<ProposedTutorialEvent>> {
        let models = sqlx::query_as::<_, TutorialEventModel>(&format!(
            "SELECT {TUTORIAL_EVENT_COLUMNS} FROM events_proposedtutorialevent ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = models.iter().map(|m| m.proposal_id).collect();
        let proposals = self.load_proposals(ProposalKind::Tutorial, &ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let proposal = proposals.get(&m.proposal_id).cloned();
                tutorial_event_from_model(m, proposal)
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_sponsored_event(&self, id: RecordId) -> RepoResult<Option<SponsoredEvent>> {
        let model = sqlx::query_as::<_, SponsoredEventModel>(&format!(
            "{SPONSORED_EVENT_SELECT} WHERE e.id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(SponsoredEvent::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_sponsored_events(&self) -> RepoResult<Vec<SponsoredEvent>> {
        let models = sqlx::query_as::<_, SponsoredEventModel>(&format!(
            "{SPONSORED_EVENT_SELECT} ORDER BY e.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(SponsoredEvent::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_keynote_events(&self) -> RepoResult<Vec<KeynoteEvent>> {
        let models = sqlx::query_as::<_, KeynoteEventModel>(
            r"
            SELECT id, speaker_name_zh_hant, speaker_name_en_us, speaker_bio_zh_hant,
                   speaker_bio_en_us, speaker_photo, session_title_zh_hant, session_title_en_us,
                   session_description_zh_hant, session_description_en_us, session_slides,
                   slido, youtube_id, social_linkedin, social_twitter, social_github
            FROM events_keynoteevent
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(KeynoteEvent::from).collect())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
