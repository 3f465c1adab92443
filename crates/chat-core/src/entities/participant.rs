//! Participant value object - a user's membership in a chat

use serde::Serialize;
use uuid::Uuid;

use crate::error::DomainResult;
use crate::validation::validate_id;

/// Chat participant, identified by user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Participant {
    pub user_id: Uuid,
}

impl Participant {
    /// Create a new Participant
    pub fn new(user_id: Uuid) -> DomainResult<Self> {
        validate_id(user_id)?;
        Ok(Self { user_id })
    }
}
