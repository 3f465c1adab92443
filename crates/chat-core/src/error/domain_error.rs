//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Invalid chat name: {0}")]
    InvalidName(&'static str),

    #[error("Invalid chief id")]
    InvalidChiefId(#[source] Box<DomainError>),

    #[error("Subject and recipient must be different users")]
    SubjectAndRecipientMustDiffer,

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Chat not found")]
    ChatNotFound,

    #[error("Invitation not found")]
    InvitationNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("User is not a member of this chat")]
    UserIsNotMember,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User is already a member of this chat")]
    UserAlreadyInChat,

    #[error("User is already invited to this chat")]
    UserAlreadyInvited,

    #[error("The chat chief cannot leave or be removed")]
    SubjectMustNotBeChief,

    #[error("A member cannot remove themselves (leave the chat instead)")]
    CannotRemoveSelf,

    #[error("Last activity time cannot move backwards")]
    LastActiveMustNotDecrease,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Subject is not a member of this chat")]
    SubjectIsNotMember,

    #[error("Subject is not the chat chief")]
    SubjectIsNotChief,

    #[error("Subject is not allowed to perform this action")]
    SubjectNotAllowed,

    #[error("Cannot view another user's chats")]
    UnauthorizedView,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Validation
            Self::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            Self::InvalidName(_) => "INVALID_NAME",
            Self::InvalidChiefId(_) => "INVALID_CHIEF_ID",
            Self::SubjectAndRecipientMustDiffer => "SUBJECT_AND_RECIPIENT_MUST_DIFFER",

            // Not Found
            Self::ChatNotFound => "UNKNOWN_CHAT",
            Self::InvitationNotFound => "UNKNOWN_INVITATION",
            Self::UserNotFound => "UNKNOWN_USER",
            Self::UserIsNotMember => "USER_IS_NOT_MEMBER",

            // Conflict
            Self::UserAlreadyInChat => "USER_ALREADY_IN_CHAT",
            Self::UserAlreadyInvited => "USER_ALREADY_INVITED",
            Self::SubjectMustNotBeChief => "SUBJECT_MUST_NOT_BE_CHIEF",
            Self::CannotRemoveSelf => "CANNOT_REMOVE_SELF",
            Self::LastActiveMustNotDecrease => "LAST_ACTIVE_MUST_NOT_DECREASE",

            // Authorization
            Self::SubjectIsNotMember => "SUBJECT_IS_NOT_MEMBER",
            Self::SubjectIsNotChief => "SUBJECT_IS_NOT_CHIEF",
            Self::SubjectNotAllowed => "SUBJECT_NOT_ALLOWED",
            Self::UnauthorizedView => "UNAUTHORIZED_VIEW",

            // Infrastructure
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier(_)
                | Self::InvalidName(_)
                | Self::InvalidChiefId(_)
                | Self::SubjectAndRecipientMustDiffer
        )
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ChatNotFound
                | Self::InvitationNotFound
                | Self::UserNotFound
                | Self::UserIsNotMember
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UserAlreadyInChat
                | Self::UserAlreadyInvited
                | Self::SubjectMustNotBeChief
                | Self::CannotRemoveSelf
                | Self::LastActiveMustNotDecrease
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::SubjectIsNotMember
                | Self::SubjectIsNotChief
                | Self::SubjectNotAllowed
                | Self::UnauthorizedView
        )
    }

    /// Check if this is an infrastructure failure rather than a domain rejection
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Internal(_))
    }
}
