//! Member service
//!
//! Handles listing chat members, leaving a chat, and removing members.

use tracing::{info, instrument};

use chat_core::error::DomainError;
use chat_core::traits::{find_chat, ChatFilter};

use crate::dto::mappers::members;
use crate::dto::MemberResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the participants of a chat the subject belongs to
    #[instrument(skip(self))]
    pub async fn chat_members(
        &self,
        subject_id: &str,
        chat_id: &str,
    ) -> ServiceResult<Vec<MemberResponse>> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;

        let chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;

        if !chat.has_participant(subject_id) {
            return Err(DomainError::SubjectIsNotMember.into());
        }

        Ok(members(&chat))
    }

    /// Leave a chat
    ///
    /// The chief cannot leave. Invitations the subject sent stay pending.
    #[instrument(skip(self))]
    pub async fn leave_chat(&self, subject_id: &str, chat_id: &str) -> ServiceResult<()> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;

        let _lock = self.ctx.locks().lock(chat_id).await;
        let mut chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;

        chat.remove_participant(subject_id)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(chat_id = %chat_id, user_id = %subject_id, "Member left chat");

        Ok(())
    }

    /// Remove another member from a chat (chief only)
    #[instrument(skip(self))]
    pub async fn remove_member(
        &self,
        subject_id: &str,
        chat_id: &str,
        user_id: &str,
    ) -> ServiceResult<()> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;
        let user_id = input::id("user_id", user_id)?;

        if user_id == subject_id {
            return Err(DomainError::CannotRemoveSelf.into());
        }

        let _lock = self.ctx.locks().lock(chat_id).await;
        let mut chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;

        if !chat.is_chief(subject_id) {
            return Err(DomainError::SubjectIsNotChief.into());
        }

        chat.remove_participant(user_id)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(
            chat_id = %chat_id,
            user_id = %user_id,
            removed_by = %subject_id,
            "Member removed from chat"
        );

        Ok(())
    }
}
