//! Chat aggregate - the consistency boundary for membership and invitations
//!
//! A `Chat` owns its participants and pending invitations. All changes go
//! through the mutators below, and each mutator either succeeds or leaves
//! the aggregate untouched. After every call the following hold:
//!
//! - the chief is a participant
//! - no user appears twice in `participants`
//! - no invitation recipient is a participant
//! - at most one invitation exists per recipient
//! - no invitation has the same subject and recipient

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::entities::{Invitation, Participant};
use crate::error::{DomainError, DomainResult};
use crate::validation::{validate_chat_name, validate_id};

/// Chat aggregate root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chat {
    id: Uuid,
    name: String,
    chief_id: Uuid,
    last_active_at: DateTime<Utc>,
    participants: Vec<Participant>,
    invitations: Vec<Invitation>,
}

/// Raw chat state, as stored by a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatParts {
    pub id: Uuid,
    pub name: String,
    pub chief_id: Uuid,
    pub last_active_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
    pub invitations: Vec<Invitation>,
}

impl Chat {
    /// Create a new Chat with the chief as its only participant
    pub fn new(name: impl Into<String>, chief_id: Uuid) -> DomainResult<Self> {
        let name = name.into();
        validate_chat_name(&name)?;
        validate_id(chief_id).map_err(|e| DomainError::InvalidChiefId(Box::new(e)))?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            chief_id,
            last_active_at: Utc::now().trunc_subsecs(6),
            participants: vec![Participant { user_id: chief_id }],
            invitations: Vec::new(),
        })
    }

    /// Rebuild a chat from stored state
    ///
    /// Repositories only store what the mutators produced, so no checks are
    /// repeated here.
    pub fn from_parts(parts: ChatParts) -> Self {
        Self {
            id: parts.id,
            name: parts.name,
            chief_id: parts.chief_id,
            last_active_at: parts.last_active_at,
            participants: parts.participants,
            invitations: parts.invitations,
        }
    }

    /// Split the chat into its stored state
    pub fn into_parts(self) -> ChatParts {
        ChatParts {
            id: self.id,
            name: self.name,
            chief_id: self.chief_id,
            last_active_at: self.last_active_at,
            participants: self.participants,
            invitations: self.invitations,
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn chief_id(&self) -> Uuid {
        self.chief_id
    }

    #[inline]
    pub fn last_active_at(&self) -> DateTime<Utc> {
        self.last_active_at
    }

    #[inline]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[inline]
    pub fn invitations(&self) -> &[Invitation] {
        &self.invitations
    }

    /// Check if a user is the chat chief
    #[inline]
    pub fn is_chief(&self, user_id: Uuid) -> bool {
        self.chief_id == user_id
    }

    /// User IDs of all participants, in join order
    pub fn participant_ids(&self) -> Vec<Uuid> {
        self.participants.iter().map(|p| p.user_id).collect()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if a user is a participant
    pub fn has_participant(&self, user_id: Uuid) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    /// Check if an invitation with this ID exists
    pub fn has_invitation(&self, id: Uuid) -> bool {
        self.invitations.iter().any(|i| i.id == id)
    }

    /// Check if a pending invitation is addressed to this user
    pub fn has_invitation_with_recipient(&self, recipient_id: Uuid) -> bool {
        self.invitations.iter().any(|i| i.recipient_id == recipient_id)
    }

    /// Get an invitation by ID
    pub fn invitation(&self, id: Uuid) -> DomainResult<&Invitation> {
        self.invitations
            .iter()
            .find(|i| i.id == id)
            .ok_or(DomainError::InvitationNotFound)
    }

    /// Get the pending invitation addressed to a user
    pub fn recipient_invitation(&self, recipient_id: Uuid) -> DomainResult<&Invitation> {
        self.invitations
            .iter()
            .find(|i| i.recipient_id == recipient_id)
            .ok_or(DomainError::InvitationNotFound)
    }

    /// Invitations sent by a user
    pub fn subject_invitations(&self, subject_id: Uuid) -> Vec<&Invitation> {
        self.invitations
            .iter()
            .filter(|i| i.subject_id == subject_id)
            .collect()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add a participant
    ///
    /// A user with a pending invitation must go through acceptance, which
    /// removes the invitation first.
    pub fn add_participant(&mut self, participant: Participant) -> DomainResult<()> {
        if self.has_participant(participant.user_id) {
            return Err(DomainError::UserAlreadyInChat);
        }
        if self.has_invitation_with_recipient(participant.user_id) {
            return Err(DomainError::UserAlreadyInvited);
        }

        self.participants.push(participant);
        Ok(())
    }

    /// Remove a participant
    pub fn remove_participant(&mut self, user_id: Uuid) -> DomainResult<()> {
        if self.is_chief(user_id) {
            return Err(DomainError::SubjectMustNotBeChief);
        }
        if !self.has_participant(user_id) {
            return Err(DomainError::UserIsNotMember);
        }

        self.participants.retain(|p| p.user_id != user_id);
        Ok(())
    }

    /// Add a pending invitation
    pub fn add_invitation(&mut self, invitation: Invitation) -> DomainResult<()> {
        if invitation.subject_id == invitation.recipient_id {
            return Err(DomainError::SubjectAndRecipientMustDiffer);
        }
        if !self.has_participant(invitation.subject_id) {
            return Err(DomainError::SubjectIsNotMember);
        }
        if self.has_participant(invitation.recipient_id) {
            return Err(DomainError::UserAlreadyInChat);
        }
        if self.has_invitation_with_recipient(invitation.recipient_id) {
            return Err(DomainError::UserAlreadyInvited);
        }

        self.invitations.push(invitation);
        Ok(())
    }

    /// Remove an invitation, returning it
    pub fn remove_invitation(&mut self, id: Uuid) -> DomainResult<Invitation> {
        let pos = self
            .invitations
            .iter()
            .position(|i| i.id == id)
            .ok_or(DomainError::InvitationNotFound)?;

        Ok(self.invitations.remove(pos))
    }

    /// Rename the chat
    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_chat_name(&name)?;

        self.name = name;
        Ok(())
    }

    /// Move the last activity time forward
    pub fn set_last_active_at(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        let at = at.trunc_subsecs(6);
        if at < self.last_active_at {
            return Err(DomainError::LastActiveMustNotDecrease);
        }

        self.last_active_at = at;
        Ok(())
    }
}
