//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Chat summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatResponse {
    pub id: Uuid,
    pub name: String,
    pub chief_id: Uuid,
    pub last_active_at: DateTime<Utc>,
    pub participant_count: usize,
}

/// One page of a user's chats, newest activity first
#[derive(Debug, Clone, Serialize)]
pub struct ChatPageResponse {
    pub chats: Vec<ChatResponse>,
    /// Cursor for the next page, present when this page is full
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_active_before: Option<DateTime<Utc>>,
}

/// Chat participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub user_id: Uuid,
    pub is_chief: bool,
}

/// Pending invitation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvitationResponse {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub subject_id: Uuid,
    pub recipient_id: Uuid,
}
