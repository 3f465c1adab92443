//! Repository implementations
//!
//! PostgreSQL implementations of the ports defined in chat-core.

mod chat;
mod error;
mod user;

pub use chat::PgChatRepository;
pub use user::PgUserDirectory;
