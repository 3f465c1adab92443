//! Test fixtures and data generators
//!
//! Provides reusable requests and seeded chats for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chat_service::dto::{
    ChatResponse, CreateChatRequest, InvitationResponse, SendInvitationRequest,
    UpdateChatNameRequest,
};

use crate::helpers::TestEnv;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn create_chat(name: &str) -> CreateChatRequest {
    CreateChatRequest {
        name: name.to_string(),
    }
}

pub fn unique_chat() -> CreateChatRequest {
    create_chat(&format!("test chat {}", unique_suffix()))
}

pub fn rename(name: &str) -> UpdateChatNameRequest {
    UpdateChatNameRequest {
        name: name.to_string(),
    }
}

pub fn invite(recipient_id: &str) -> SendInvitationRequest {
    SendInvitationRequest {
        recipient_id: recipient_id.to_string(),
    }
}

/// A chat with a chief and one joined member
pub struct ChatFixture {
    pub chat: ChatResponse,
    pub chief: String,
    pub member: String,
}

impl ChatFixture {
    pub fn chat_id(&self) -> String {
        self.chat.id.to_string()
    }

    /// Create the chat and bring a second user in through an invitation
    pub async fn create(env: &TestEnv) -> Result<Self> {
        let chief = env.user().await?;
        let member = env.user().await?;

        let chat = env.chat_service().create_chat(&chief, unique_chat()).await?;
        let invitation = env
            .invitation_service()
            .send_invitation(&chief, &chat.id.to_string(), invite(&member))
            .await?;
        let chat = env
            .invitation_service()
            .accept_invitation(&member, &invitation.id.to_string())
            .await?;

        Ok(Self {
            chat,
            chief,
            member,
        })
    }

    /// Invite a fresh user from the given participant
    pub async fn invite_new_user(
        &self,
        env: &TestEnv,
        from: &str,
    ) -> Result<(String, InvitationResponse)> {
        let recipient = env.user().await?;
        let invitation = env
            .invitation_service()
            .send_invitation(from, &self.chat_id(), invite(&recipient))
            .await?;
        Ok((recipient, invitation))
    }
}
