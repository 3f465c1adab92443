//! Service context - dependency container for services
//!
//! Holds the chat repository, the user directory and the per-chat lock
//! registry shared by all services.

use std::sync::Arc;

use chat_core::traits::{ChatRepository, UserDirectory};
use chat_db::{PgChatRepository, PgPool, PgUserDirectory};

use super::error::{ServiceError, ServiceResult};
use super::locks::ChatLocks;

/// Service context containing all dependencies
///
/// Cheap to clone; clones share repositories and locks.
#[derive(Clone)]
pub struct ServiceContext {
    chat_repo: Arc<dyn ChatRepository>,
    user_directory: Arc<dyn UserDirectory>,
    locks: ChatLocks,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(chat_repo: Arc<dyn ChatRepository>, user_directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            chat_repo,
            user_directory,
            locks: ChatLocks::new(),
        }
    }

    /// Create a service context backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgChatRepository::new(pool.clone())),
            Arc::new(PgUserDirectory::new(pool)),
        )
    }

    /// Get the chat repository
    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    /// Get the user directory
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }

    /// Get the per-chat lock registry
    pub fn locks(&self) -> &ChatLocks {
        &self.locks
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("locks", &self.locks.active())
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    chat_repo: Option<Arc<dyn ChatRepository>>,
    user_directory: Option<Arc<dyn UserDirectory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat_repo(mut self, repo: Arc<dyn ChatRepository>) -> Self {
        self.chat_repo = Some(repo);
        self
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if a dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.chat_repo
                .ok_or_else(|| ServiceError::internal("chat_repo is required"))?,
            self.user_directory
                .ok_or_else(|| ServiceError::internal("user_directory is required"))?,
        ))
    }
}
