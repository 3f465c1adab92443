//! Caller input parsing shared by the services

use chat_core::error::DomainError;
use chat_core::validation::{parse_id, validate_chat_name};
use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Parse an identifier, naming the field on failure
pub(crate) fn id(field: &'static str, raw: &str) -> ServiceResult<Uuid> {
    parse_id(raw).map_err(|e| ServiceError::invalid_input(field, e))
}

/// Validate a chat name, naming the field on failure
pub(crate) fn chat_name(raw: &str) -> ServiceResult<()> {
    validate_chat_name(raw).map_err(|e| ServiceError::invalid_input("name", e))
}

/// Parse the chief of a new chat
pub(crate) fn chief_id(raw: &str) -> ServiceResult<Uuid> {
    parse_id(raw).map_err(|e| {
        ServiceError::invalid_input("chief_id", DomainError::InvalidChiefId(Box::new(e)))
    })
}
