//! # chat-core
//!
//! Domain layer containing the chat aggregate, field validators, and the
//! repository ports. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;

// Re-export commonly used types at crate root
pub use entities::{Chat, ChatParts, Invitation, Participant};
pub use error::{DomainError, DomainResult};
pub use traits::{find_chat, ChatFilter, ChatRepository, RepoResult, UserDirectory};
pub use validation::{parse_id, validate_chat_name, validate_id, CHAT_NAME_MAX_LEN};
