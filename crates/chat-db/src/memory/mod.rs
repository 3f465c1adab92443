//! In-memory adapters
//!
//! Same contract and ordering as the PostgreSQL repositories, backed by
//! process-local maps. Used by tests and by embedders that need no database.

mod chat;
mod user;

pub use chat::InMemoryChatRepository;
pub use user::InMemoryUserDirectory;
