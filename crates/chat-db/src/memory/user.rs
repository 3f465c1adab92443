//! In-memory implementation of UserDirectory

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use chat_core::traits::{RepoResult, UserDirectory};

/// Set of known user IDs
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashSet<Uuid>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with the given users
    pub fn with_users(users: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    pub fn add_user(&self, id: Uuid) {
        self.users.write().insert(id);
    }

    pub fn remove_user(&self, id: Uuid) {
        self.users.write().remove(&id);
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn user_exists(&self, id: Uuid) -> RepoResult<bool> {
        Ok(self.users.read().contains(&id))
    }
}
