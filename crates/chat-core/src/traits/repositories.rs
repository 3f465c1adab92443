//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Chats are always read and written as whole
//! aggregates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::Chat;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Chat Filter
// ============================================================================

/// Conjunction of optional predicates over chats
///
/// An absent predicate matches every chat. An empty `chat_ids` set matches
/// none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatFilter {
    /// Chat ID is one of these
    pub chat_ids: Option<Vec<Uuid>>,
    /// Chat has this participant
    pub participant_id: Option<Uuid>,
    /// Chat has an invitation with this ID
    pub invitation_id: Option<Uuid>,
    /// Chat has a pending invitation addressed to this user
    pub invitation_recipient_id: Option<Uuid>,
    /// Chat has a pending invitation sent by this user
    pub invitation_subject_id: Option<Uuid>,
    /// Chat was last active strictly before this instant
    pub active_before: Option<DateTime<Utc>>,
    /// Maximum number of chats returned
    pub limit: Option<usize>,
}

impl ChatFilter {
    /// Filter matching a single chat
    pub fn by_id(id: Uuid) -> Self {
        Self {
            chat_ids: Some(vec![id]),
            ..Self::default()
        }
    }

    /// Filter matching chats a user participates in
    pub fn by_participant(user_id: Uuid) -> Self {
        Self {
            participant_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Filter matching chats with a pending invitation to a user
    pub fn by_recipient(recipient_id: Uuid) -> Self {
        Self {
            invitation_recipient_id: Some(recipient_id),
            ..Self::default()
        }
    }

    pub fn with_invitation(mut self, invitation_id: Uuid) -> Self {
        self.invitation_id = Some(invitation_id);
        self
    }

    pub fn with_recipient(mut self, recipient_id: Uuid) -> Self {
        self.invitation_recipient_id = Some(recipient_id);
        self
    }

    pub fn with_subject(mut self, subject_id: Uuid) -> Self {
        self.invitation_subject_id = Some(subject_id);
        self
    }

    pub fn active_before(mut self, at: DateTime<Utc>) -> Self {
        self.active_before = Some(at);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single chat against every predicate except `limit`
    ///
    /// Invitation predicates are evaluated per invitation, so `with_invitation`
    /// together with `with_recipient` requires one invitation satisfying both.
    pub fn matches(&self, chat: &Chat) -> bool {
        if let Some(ids) = &self.chat_ids {
            if !ids.contains(&chat.id()) {
                return false;
            }
        }
        if let Some(user_id) = self.participant_id {
            if !chat.has_participant(user_id) {
                return false;
            }
        }
        if let Some(at) = self.active_before {
            if chat.last_active_at() >= at {
                return false;
            }
        }

        if self.has_invitation_predicate() {
            return chat.invitations().iter().any(|inv| {
                self.invitation_id.is_none_or(|id| inv.id == id)
                    && self
                        .invitation_recipient_id
                        .is_none_or(|id| inv.recipient_id == id)
                    && self
                        .invitation_subject_id
                        .is_none_or(|id| inv.subject_id == id)
            });
        }

        true
    }

    /// Whether any predicate looks at invitations
    pub fn has_invitation_predicate(&self) -> bool {
        self.invitation_id.is_some()
            || self.invitation_recipient_id.is_some()
            || self.invitation_subject_id.is_some()
    }
}

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// List chats matching the filter
    ///
    /// Results are ordered by last activity, newest first, ties broken by
    /// chat ID.
    async fn list(&self, filter: &ChatFilter) -> RepoResult<Vec<Chat>>;

    /// Insert the chat, or replace the stored chat with the same ID in full
    async fn upsert(&self, chat: &Chat) -> RepoResult<()>;
}

/// Find the only chat matching the filter
///
/// Fails with `ChatNotFound` unless exactly one chat matches.
pub async fn find_chat(repo: &dyn ChatRepository, filter: &ChatFilter) -> RepoResult<Chat> {
    let mut chats = repo.list(filter).await?;
    if chats.len() != 1 {
        return Err(DomainError::ChatNotFound);
    }
    chats.pop().ok_or(DomainError::ChatNotFound)
}

// ============================================================================
// User Directory
// ============================================================================

/// Read-only view of the user collection owned by the user module
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Check if a user exists
    async fn user_exists(&self, id: Uuid) -> RepoResult<bool>;
}
