//! Data transfer objects for service requests and responses
//!
//! This module provides:
//! - Request DTOs carrying untrusted caller input
//! - Response DTOs for serializing results
//! - Mappers for converting the chat aggregate to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateChatRequest, SendInvitationRequest, UpdateChatNameRequest};
pub use responses::{ChatPageResponse, ChatResponse, InvitationResponse, MemberResponse};
