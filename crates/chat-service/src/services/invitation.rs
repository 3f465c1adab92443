//! Invitation service
//!
//! Handles sending, accepting, cancelling, and listing chat invitations.

use tracing::{info, instrument};

use chat_core::entities::{Chat, Invitation, Participant};
use chat_core::error::DomainError;
use chat_core::traits::{find_chat, ChatFilter};

use crate::dto::mappers::invitations;
use crate::dto::{ChatResponse, InvitationResponse, SendInvitationRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::input;

/// Invitation service
pub struct InvitationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvitationService<'a> {
    /// Create a new InvitationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the pending invitations of a chat
    ///
    /// The chief sees every invitation; other participants see only the
    /// invitations they sent.
    #[instrument(skip(self))]
    pub async fn chat_invitations(
        &self,
        subject_id: &str,
        chat_id: &str,
    ) -> ServiceResult<Vec<InvitationResponse>> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;

        let chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;

        if !chat.has_participant(subject_id) {
            return Err(DomainError::SubjectIsNotMember.into());
        }

        if chat.is_chief(subject_id) {
            Ok(invitations(&chat, chat.invitations()))
        } else {
            Ok(invitations(&chat, chat.subject_invitations(subject_id)))
        }
    }

    /// List the pending invitations addressed to the subject, one per chat
    #[instrument(skip(self))]
    pub async fn received_invitations(
        &self,
        subject_id: &str,
    ) -> ServiceResult<Vec<InvitationResponse>> {
        let subject_id = input::id("subject_id", subject_id)?;

        let chats = self
            .ctx
            .chat_repo()
            .list(&ChatFilter::by_recipient(subject_id))
            .await?;

        Ok(chats
            .iter()
            .filter_map(|chat| {
                chat.recipient_invitation(subject_id)
                    .ok()
                    .map(|inv| InvitationResponse::new(chat, inv))
            })
            .collect())
    }

    /// Invite a user to a chat the subject participates in
    #[instrument(skip(self, request))]
    pub async fn send_invitation(
        &self,
        subject_id: &str,
        chat_id: &str,
        request: SendInvitationRequest,
    ) -> ServiceResult<InvitationResponse> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;
        let recipient_id = input::id("recipient_id", &request.recipient_id)?;

        let _lock = self.ctx.locks().lock(chat_id).await;
        let mut chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;

        let invitation = Invitation::new(subject_id, recipient_id)?;

        if !self.ctx.user_directory().user_exists(recipient_id).await? {
            return Err(DomainError::UserNotFound.into());
        }

        chat.add_invitation(invitation)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(
            chat_id = %chat_id,
            invitation_id = %invitation.id,
            subject_id = %subject_id,
            recipient_id = %recipient_id,
            "Invitation sent"
        );

        Ok(InvitationResponse::new(&chat, &invitation))
    }

    /// Accept an invitation addressed to the subject and join its chat
    ///
    /// Invitations addressed to someone else are reported as not found.
    #[instrument(skip(self))]
    pub async fn accept_invitation(
        &self,
        subject_id: &str,
        invitation_id: &str,
    ) -> ServiceResult<ChatResponse> {
        let subject_id = input::id("subject_id", subject_id)?;
        let invitation_id = input::id("invitation_id", invitation_id)?;

        let filter = ChatFilter::by_recipient(subject_id).with_invitation(invitation_id);
        let chat_id = self.find_invited_chat(&filter).await?.id();

        // reload under the lock; a concurrent accept or cancel may have won
        let _lock = self.ctx.locks().lock(chat_id).await;
        let mut chat = self.find_invited_chat(&filter).await?;

        let invitation = chat.remove_invitation(invitation_id)?;
        chat.add_participant(Participant::new(invitation.recipient_id)?)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(
            chat_id = %chat_id,
            invitation_id = %invitation_id,
            user_id = %subject_id,
            "Invitation accepted"
        );

        Ok(ChatResponse::from(&chat))
    }

    /// Cancel a pending invitation
    ///
    /// Allowed for the chief, the inviter while still a participant, and the
    /// recipient.
    #[instrument(skip(self))]
    pub async fn cancel_invitation(
        &self,
        subject_id: &str,
        chat_id: &str,
        invitation_id: &str,
    ) -> ServiceResult<()> {
        let subject_id = input::id("subject_id", subject_id)?;
        let chat_id = input::id("chat_id", chat_id)?;
        let invitation_id = input::id("invitation_id", invitation_id)?;

        let _lock = self.ctx.locks().lock(chat_id).await;
        let mut chat = find_chat(self.ctx.chat_repo(), &ChatFilter::by_id(chat_id)).await?;
        let invitation = *chat.invitation(invitation_id)?;

        let is_chief = chat.is_chief(subject_id);
        let is_inviter = invitation.subject_id == subject_id;
        let is_recipient = invitation.recipient_id == subject_id;

        if !(is_chief || is_inviter || is_recipient) {
            return Err(DomainError::SubjectNotAllowed.into());
        }
        if is_inviter && !is_chief && !chat.has_participant(subject_id) {
            return Err(DomainError::SubjectIsNotMember.into());
        }

        chat.remove_invitation(invitation_id)?;
        self.ctx.chat_repo().upsert(&chat).await?;

        info!(
            chat_id = %chat_id,
            invitation_id = %invitation_id,
            cancelled_by = %subject_id,
            "Invitation cancelled"
        );

        Ok(())
    }

    async fn find_invited_chat(&self, filter: &ChatFilter) -> ServiceResult<Chat> {
        let chat = find_chat(self.ctx.chat_repo(), filter)
            .await
            .map_err(|e| match e {
                DomainError::ChatNotFound => DomainError::InvitationNotFound,
                other => other,
            })?;
        Ok(chat)
    }
}
