//! Request DTOs
//!
//! Fields arrive as untrusted strings; the services validate them with the
//! chat-core validators.

use serde::Deserialize;

/// Create chat request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatRequest {
    pub name: String,
}

/// Rename chat request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChatNameRequest {
    pub name: String,
}

/// Send invitation request
#[derive(Debug, Clone, Deserialize)]
pub struct SendInvitationRequest {
    pub recipient_id: String,
}
