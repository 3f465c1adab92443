//! Chat aggregate <-> row mappers

use std::collections::HashMap;

use uuid::Uuid;

use chat_core::entities::{Chat, ChatParts, Invitation, Participant};

use crate::models::{ChatModel, InvitationModel, ParticipantModel};

/// Column arrays for the participant rows of one chat
pub struct ParticipantRows {
    pub user_ids: Vec<Uuid>,
}

impl ParticipantRows {
    pub fn new(chat: &Chat) -> Self {
        Self {
            user_ids: chat.participant_ids(),
        }
    }
}

/// Column arrays for the invitation rows of one chat
pub struct InvitationRows {
    pub ids: Vec<Uuid>,
    pub subject_ids: Vec<Uuid>,
    pub recipient_ids: Vec<Uuid>,
}

impl InvitationRows {
    pub fn new(chat: &Chat) -> Self {
        let invitations = chat.invitations();
        Self {
            ids: invitations.iter().map(|i| i.id).collect(),
            subject_ids: invitations.iter().map(|i| i.subject_id).collect(),
            recipient_ids: invitations.iter().map(|i| i.recipient_id).collect(),
        }
    }
}

/// Assemble aggregates from a chat page and the child rows of those chats
///
/// Child rows must already be in position order. The order of `chats` is kept.
pub fn assemble_chats(
    chats: Vec<ChatModel>,
    participants: Vec<ParticipantModel>,
    invitations: Vec<InvitationModel>,
) -> Vec<Chat> {
    let mut participants_by_chat: HashMap<Uuid, Vec<Participant>> = HashMap::new();
    for row in participants {
        participants_by_chat
            .entry(row.chat_id)
            .or_default()
            .push(Participant {
                user_id: row.user_id,
            });
    }

    let mut invitations_by_chat: HashMap<Uuid, Vec<Invitation>> = HashMap::new();
    for row in invitations {
        invitations_by_chat
            .entry(row.chat_id)
            .or_default()
            .push(Invitation {
                id: row.id,
                subject_id: row.subject_id,
                recipient_id: row.recipient_id,
            });
    }

    chats
        .into_iter()
        .map(|model| {
            Chat::from_parts(ChatParts {
                participants: participants_by_chat.remove(&model.id).unwrap_or_default(),
                invitations: invitations_by_chat.remove(&model.id).unwrap_or_default(),
                id: model.id,
                name: model.name,
                chief_id: model.chief_id,
                last_active_at: model.last_active_at,
            })
        })
        .collect()
}
