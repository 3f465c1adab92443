//! # chat-db
//!
//! Persistence adapters for the chat-core ports.
//!
//! ## Overview
//!
//! - Connection pool management and schema bootstrap
//! - Database models with SQLx `FromRow` derives
//! - Aggregate ↔ row mappers
//! - PostgreSQL repositories (`PgChatRepository`, `PgUserDirectory`)
//! - In-memory repositories with the same contract
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_common::AppConfig;
//! use chat_db::{create_pool, ensure_schema, PgChatRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     ensure_schema(&pool).await?;
//!     let chats = PgChatRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{InMemoryChatRepository, InMemoryUserDirectory};
pub use pool::{create_pool, create_pool_with_timeouts, ensure_schema, PgPool, PoolTimeouts};
pub use repositories::{PgChatRepository, PgUserDirectory};
