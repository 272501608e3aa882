use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::model::{Chat, ChatMessage};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("chat history is unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for summarize conversations, keyed by owner and the chat id
/// the client sees.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn find_chat_by_external_id(
        &self,
        user_id: Uuid,
        external_id: &str,
    ) -> Result<Option<Chat>, HistoryError>;

    /// Appends `messages` to an existing chat and bumps its timestamp, or
    /// creates the chat with `title` when there is none yet. The title of an
    /// existing chat is kept.
    async fn upsert_chat(
        &self,
        user_id: Uuid,
        external_id: &str,
        title: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<Chat, HistoryError>;

    /// Every chat of `user_id`, most recently updated first.
    async fn list_chats(&self, user_id: Uuid) -> Result<Vec<Chat>, HistoryError>;

    /// Replaces the title of an existing chat. Returns whether the chat was
    /// found. Messages and the timestamp are left alone.
    async fn rename_chat(
        &self,
        user_id: Uuid,
        external_id: &str,
        title: &str,
    ) -> Result<bool, HistoryError>;

    /// Returns whether a chat was removed.
    async fn delete_chat(&self, user_id: Uuid, external_id: &str) -> Result<bool, HistoryError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryChatStore {
    chats: DashMap<(Uuid, String), Chat>,
}

impl MemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn find_chat_by_external_id(
        &self,
        user_id: Uuid,
        external_id: &str,
    ) -> Result<Option<Chat>, HistoryError> {
        Ok(self
            .chats
            .get(&(user_id, external_id.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn upsert_chat(
        &self,
        user_id: Uuid,
        external_id: &str,
        title: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<Chat, HistoryError> {
        let now = Utc::now();
        let mut entry = self
            .chats
            .entry((user_id, external_id.to_string()))
            .or_insert_with(|| {
                debug!(%user_id, external_id, "creating chat");
                Chat {
                    external_id: external_id.to_string(),
                    user_id,
                    title: title.to_string(),
                    messages: Vec::new(),
                    updated_at: now,
                }
            });

        let chat = entry.value_mut();
        chat.messages.extend(messages);
        chat.updated_at = now;
        Ok(chat.clone())
    }

    async fn list_chats(&self, user_id: Uuid) -> Result<Vec<Chat>, HistoryError> {
        let mut chats: Vec<Chat> = self
            .chats
            .iter()
            .filter(|entry| entry.key().0 == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(chats)
    }

    async fn rename_chat(
        &self,
        user_id: Uuid,
        external_id: &str,
        title: &str,
    ) -> Result<bool, HistoryError> {
        match self.chats.get_mut(&(user_id, external_id.to_string())) {
            Some(mut entry) => {
                entry.value_mut().title = title.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_chat(&self, user_id: Uuid, external_id: &str) -> Result<bool, HistoryError> {
        Ok(self
            .chats
            .remove(&(user_id, external_id.to_string()))
            .is_some())
    }
}
