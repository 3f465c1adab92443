//! # chat-service
//!
//! Application layer containing the chat use cases, the per-chat write
//! locks, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    ChatService, ErrorKind, InvitationService, MemberService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, CHATS_PAGE_SIZE,
};
