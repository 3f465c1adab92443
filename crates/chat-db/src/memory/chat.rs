//! In-memory implementation of ChatRepository

use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::Chat;
use chat_core::traits::{ChatFilter, ChatRepository, RepoResult};

/// Chats keyed by ID
#[derive(Debug, Default)]
pub struct InMemoryChatRepository {
    chats: RwLock<HashMap<Uuid, Chat>>,
}

impl InMemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored chats
    pub fn len(&self) -> usize {
        self.chats.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.read().is_empty()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    #[instrument(skip(self))]
    async fn list(&self, filter: &ChatFilter) -> RepoResult<Vec<Chat>> {
        let mut chats: Vec<Chat> = self
            .chats
            .read()
            .values()
            .filter(|chat| filter.matches(chat))
            .cloned()
            .collect();

        chats.sort_by_key(|chat| (Reverse(chat.last_active_at()), chat.id()));
        if let Some(limit) = filter.limit {
            chats.truncate(limit);
        }

        Ok(chats)
    }

    #[instrument(skip(self, chat), fields(chat_id = %chat.id()))]
    async fn upsert(&self, chat: &Chat) -> RepoResult<()> {
        self.chats.write().insert(chat.id(), chat.clone());
        Ok(())
    }
}
