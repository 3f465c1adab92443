//! Field validators
//!
//! Pure checks for identifiers and chat names. Every layer calls these
//! before touching an aggregate or a repository.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Maximum chat name length, in characters
pub const CHAT_NAME_MAX_LEN: usize = 50;

/// Reject the nil UUID
pub fn validate_id(id: Uuid) -> DomainResult<()> {
    if id.is_nil() {
        return Err(DomainError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}

/// Parse an untrusted identifier
///
/// Accepts any syntactically valid UUID except the nil UUID.
pub fn parse_id(raw: &str) -> DomainResult<Uuid> {
    let id = Uuid::try_parse(raw).map_err(|_| DomainError::InvalidIdentifier(raw.to_string()))?;
    validate_id(id)?;
    Ok(id)
}

/// Validate a chat display name
///
/// A valid name is 1 to 50 characters long, contains no control characters
/// (tabs and newlines included) and does not start or end with whitespace.
pub fn validate_chat_name(name: &str) -> DomainResult<()> {
    let len = name.chars().count();
    if len == 0 || len > CHAT_NAME_MAX_LEN {
        return Err(DomainError::InvalidName("must be 1-50 characters"));
    }

    if name.chars().any(char::is_control) {
        return Err(DomainError::InvalidName("must not contain control characters"));
    }

    let starts_blank = name.chars().next().is_some_and(char::is_whitespace);
    let ends_blank = name.chars().next_back().is_some_and(char::is_whitespace);
    if starts_blank || ends_blank {
        return Err(DomainError::InvalidName(
            "must not start or end with whitespace",
        ));
    }

    Ok(())
}
