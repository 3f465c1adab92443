//! Chat database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for chats table
#[derive(Debug, Clone, FromRow)]
pub struct ChatModel {
    pub id: Uuid,
    pub name: String,
    pub chief_id: Uuid,
    pub last_active_at: DateTime<Utc>,
}

/// Database model for chat_participants table
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub chat_id: Uuid,
    pub user_id: Uuid,
}

/// Database model for chat_invitations table
#[derive(Debug, Clone, FromRow)]
pub struct InvitationModel {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub subject_id: Uuid,
    pub recipient_id: Uuid,
}
