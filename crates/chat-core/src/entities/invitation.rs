//! Invitation value object - a pending offer of chat membership

use serde::Serialize;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::validation::validate_id;

/// Pending invitation from a subject (inviter) to a recipient (invitee)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Invitation {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub recipient_id: Uuid,
}

impl Invitation {
    /// Create a new Invitation with a fresh ID
    ///
    /// Only builds the value; adding it to a chat is a separate step
    /// (`Chat::add_invitation`).
    pub fn new(subject_id: Uuid, recipient_id: Uuid) -> DomainResult<Self> {
        validate_id(subject_id)?;
        validate_id(recipient_id)?;

        if subject_id == recipient_id {
            return Err(DomainError::SubjectAndRecipientMustDiffer);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            subject_id,
            recipient_id,
        })
    }

    /// Check whether the user is involved in this invitation
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.subject_id == user_id || self.recipient_id == user_id
    }
}
