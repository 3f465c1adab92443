//! Business logic services
//!
//! One service per concern. Each operation validates caller input, loads the
//! chat, applies the aggregate mutators, and saves the whole chat back.

pub mod chat;
pub mod context;
pub mod error;
mod input;
pub mod invitation;
pub mod locks;
pub mod member;

// Re-export all services for convenience
pub use chat::{ChatService, CHATS_PAGE_SIZE};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ErrorKind, ServiceError, ServiceResult};
pub use invitation::InvitationService;
pub use locks::{ChatLockGuard, ChatLocks};
pub use member::MemberService;
