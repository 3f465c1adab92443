//! Service layer error types
//!
//! Provides a unified error type for all service operations. Every error is
//! logged once, when it is created: infrastructure failures at `error`, all
//! other rejections at `debug`.

use chat_core::DomainError;
use std::fmt;
use tracing::{debug, error};

/// Caller-visible error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or invalid caller input
    Input,
    /// Chat, invitation, user or membership does not exist
    NotFound,
    /// Operation contradicts the current chat state
    Conflict,
    /// Subject lacks the required role or membership
    Authorization,
    /// Storage or other internal failure
    Infrastructure,
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or repository failure
    Domain(DomainError),

    /// Caller input failed validation
    InvalidInput {
        field: &'static str,
        source: DomainError,
    },

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::InvalidInput { field, source } => write!(f, "Invalid {field}: {source}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) | Self::InvalidInput { source: e, .. } => Some(e),
            Self::Internal(_) => None,
        }
    }
}

impl ServiceError {
    /// Create an input error for a named field
    pub fn invalid_input(field: &'static str, source: DomainError) -> Self {
        Self::InvalidInput { field, source }.logged()
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into()).logged()
    }

    /// The underlying domain error, if any
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::InvalidInput { source: e, .. } => Some(e),
            Self::Internal(_) => None,
        }
    }

    /// Get the error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::Input,
            Self::Internal(_) => ErrorKind::Infrastructure,
            Self::Domain(e) => {
                if e.is_validation() {
                    ErrorKind::Input
                } else if e.is_not_found() {
                    ErrorKind::NotFound
                } else if e.is_conflict() {
                    ErrorKind::Conflict
                } else if e.is_authorization() {
                    ErrorKind::Authorization
                } else {
                    ErrorKind::Infrastructure
                }
            }
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Input => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Authorization => 403,
            ErrorKind::Infrastructure => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) | Self::InvalidInput { source: e, .. } => e.code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn logged(self) -> Self {
        if self.kind() == ErrorKind::Infrastructure {
            error!(error = %self, code = self.error_code(), "Chat operation failed");
        } else {
            debug!(error = %self, code = self.error_code(), "Chat operation rejected");
        }
        self
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err).logged()
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
