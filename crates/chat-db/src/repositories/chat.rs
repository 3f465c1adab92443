//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};
use uuid::Uuid;

use chat_core::entities::Chat;
use chat_core::error::DomainError;
use chat_core::traits::{ChatFilter, ChatRepository, RepoResult};

use crate::mappers::{assemble_chats, InvitationRows, ParticipantRows};
use crate::models::{ChatModel, InvitationModel, ParticipantModel};

use super::error::{map_db_error, map_unique_violation, to_i64};

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the chat page query for a filter
///
/// Each participant or invitation predicate becomes an `EXISTS` subquery, so
/// a chat row is returned at most once.
fn build_list_query(filter: &ChatFilter) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT c.id, c.name, c.chief_id, c.last_active_at FROM chats c WHERE TRUE",
    );

    if let Some(ids) = &filter.chat_ids {
        qb.push(" AND c.id = ANY(").push_bind(ids.clone()).push(")");
    }

    if let Some(user_id) = filter.participant_id {
        qb.push(" AND EXISTS (SELECT 1 FROM chat_participants p")
            .push(" WHERE p.chat_id = c.id AND p.user_id = ")
            .push_bind(user_id)
            .push(")");
    }

    if filter.has_invitation_predicate() {
        qb.push(" AND EXISTS (SELECT 1 FROM chat_invitations i WHERE i.chat_id = c.id");
        if let Some(id) = filter.invitation_id {
            qb.push(" AND i.id = ").push_bind(id);
        }
        if let Some(id) = filter.invitation_recipient_id {
            qb.push(" AND i.recipient_id = ").push_bind(id);
        }
        if let Some(id) = filter.invitation_subject_id {
            qb.push(" AND i.subject_id = ").push_bind(id);
        }
        qb.push(")");
    }

    if let Some(at) = filter.active_before {
        qb.push(" AND c.last_active_at < ").push_bind(at);
    }

    qb.push(" ORDER BY c.last_active_at DESC, c.id");

    if let Some(limit) = filter.limit {
        qb.push(" LIMIT ").push_bind(to_i64(limit));
    }

    qb
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: &ChatFilter) -> RepoResult<Vec<Chat>> {
        // chat rows and child rows must come from one snapshot, or a
        // concurrent upsert shows up half applied
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let mut qb = build_list_query(filter);
        let chats = qb
            .build_query_as::<ChatModel>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if chats.is_empty() {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(Vec::new());
        }

        let chat_ids: Vec<Uuid> = chats.iter().map(|c| c.id).collect();

        let participants = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT chat_id, user_id
            FROM chat_participants
            WHERE chat_id = ANY($1)
            ORDER BY chat_id, position
            ",
        )
        .bind(&chat_ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let invitations = sqlx::query_as::<_, InvitationModel>(
            r"
            SELECT id, chat_id, subject_id, recipient_id
            FROM chat_invitations
            WHERE chat_id = ANY($1)
            ORDER BY chat_id, position
            ",
        )
        .bind(&chat_ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(count = chats.len(), "chats loaded");
        Ok(assemble_chats(chats, participants, invitations))
    }

    #[instrument(skip(self, chat), fields(chat_id = %chat.id()))]
    async fn upsert(&self, chat: &Chat) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO chats (id, name, chief_id, last_active_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                chief_id = EXCLUDED.chief_id,
                last_active_at = EXCLUDED.last_active_at
            ",
        )
        .bind(chat.id())
        .bind(chat.name())
        .bind(chat.chief_id())
        .bind(chat.last_active_at())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM chat_participants WHERE chat_id = $1")
            .bind(chat.id())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let participants = ParticipantRows::new(chat);
        sqlx::query(
            r"
            INSERT INTO chat_participants (chat_id, user_id, position)
            SELECT $1, p.user_id, p.position
            FROM UNNEST($2::uuid[]) WITH ORDINALITY AS p(user_id, position)
            ",
        )
        .bind(chat.id())
        .bind(&participants.user_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query("DELETE FROM chat_invitations WHERE chat_id = $1")
            .bind(chat.id())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let invitations = InvitationRows::new(chat);
        sqlx::query(
            r"
            INSERT INTO chat_invitations (id, chat_id, subject_id, recipient_id, position)
            SELECT i.id, $1, i.subject_id, i.recipient_id, i.position
            FROM UNNEST($2::uuid[], $3::uuid[], $4::uuid[])
                WITH ORDINALITY AS i(id, subject_id, recipient_id, position)
            ",
        )
        .bind(chat.id())
        .bind(&invitations.ids)
        .bind(&invitations.subject_ids)
        .bind(&invitations.recipient_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyInvited))?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            participants = chat.participants().len(),
            invitations = chat.invitations().len(),
            "chat upserted"
        );
        Ok(())
    }
}
