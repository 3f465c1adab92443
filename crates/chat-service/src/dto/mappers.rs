//! Aggregate to DTO mappers

use chat_core::entities::{Chat, Invitation};

use super::responses::{ChatResponse, InvitationResponse, MemberResponse};

impl From<&Chat> for ChatResponse {
    fn from(chat: &Chat) -> Self {
        Self {
            id: chat.id(),
            name: chat.name().to_string(),
            chief_id: chat.chief_id(),
            last_active_at: chat.last_active_at(),
            participant_count: chat.participants().len(),
        }
    }
}

impl InvitationResponse {
    pub fn new(chat: &Chat, invitation: &Invitation) -> Self {
        Self {
            id: invitation.id,
            chat_id: chat.id(),
            subject_id: invitation.subject_id,
            recipient_id: invitation.recipient_id,
        }
    }
}

/// Participants of a chat, in join order
pub fn members(chat: &Chat) -> Vec<MemberResponse> {
    chat.participants()
        .iter()
        .map(|p| MemberResponse {
            user_id: p.user_id,
            is_chief: chat.is_chief(p.user_id),
        })
        .collect()
}

/// Map invitations of a chat to responses
pub fn invitations<'a>(
    chat: &Chat,
    invitations: impl IntoIterator<Item = &'a Invitation>,
) -> Vec<InvitationResponse> {
    invitations
        .into_iter()
        .map(|inv| InvitationResponse::new(chat, inv))
        .collect()
}
