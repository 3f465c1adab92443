//! Chat service
//!
//! Handles chat creation, renaming, and listing the chats a user belongs to.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use chat_core::entities::Chat;
use chat_core::error::DomainError;
use chat_core::traits::{find_chat, ChatFilter};

use crate::dto::{ChatPageResponse, ChatResponse, CreateChatRequest, UpdateChatNameRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input;

/// Page size for a user's chat list
pub const CHATS_PAGE_SIZE: usize = 50;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a chat with the caller as chief
    #[instrument(skip(self, request))]
    pub async fn create_chat(
        &self,
        chief_id: &str,
        request: CreateChatRequest,
    ) -> ServiceResult<ChatResponse> {
        let chief_id = input::chief_id(chief_id)?;
        input::chat_name(&request.name)?;

        let chat = Chat::new(request.name, chief_id)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(chat_id = %chat.id(), chief_id = %chief_id, "Chat created");

        Ok(ChatResponse::from(&chat))
    }

    /// Rename a chat (chief only)
    #[instrument(skip(self, request))]
    pub async fn update_chat_name(
        &self,
        subject_id: &str,
        chat_id: &str,
        request: UpdateChatNameRequest,
    ) -> ServiceResult<ChatResponse> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;
        input::chat_name(&request.name)?;

        let _lock = self.ctx.locks().lock(chat_id).await;
        let mut chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;

        if !chat.is_chief(subject_id) {
            return Err(DomainError::SubjectIsNotChief.into());
        }

        chat.update_name(request.name)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(chat_id = %chat_id, name = %chat.name(), "Chat renamed");

        Ok(ChatResponse::from(&chat))
    }

    /// List the chats a user participates in, newest activity first
    ///
    /// A user may only list their own chats. Pass the previous page's
    /// `next_active_before` to continue.
    #[instrument(skip(self))]
    pub async fn which_chats_does_user_participate_in(
        &self,
        subject_id: &str,
        user_id: &str,
        active_before: Option<DateTime<Utc>>,
    ) -> ServiceResult<ChatPageResponse> {
        let subject_id = input::id("subject_id", subject_id)?;
        let user_id = input::id("user_id", user_id)?;

        if subject_id != user_id {
            return Err(DomainError::UnauthorizedView.into());
        }

        let mut filter = ChatFilter::by_participant(user_id).limit(CHATS_PAGE_SIZE);
        filter.active_before = active_before;

        let chats = self.ctx.chat_repo().list(&filter).await?;

        let next_active_before = if chats.len() == CHATS_PAGE_SIZE {
            chats.last().map(Chat::last_active_at)
        } else {
            None
        };

        Ok(ChatPageResponse {
            chats: chats.iter().map(ChatResponse::from).collect(),
            next_active_before,
        })
    }
}
