use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub content: String,
    pub url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// The request side of an exchange: the URL the user asked about.
    pub fn user(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            kind: MessageKind::User,
            content: url.clone(),
            url: Some(url),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Assistant,
            content: summary.into(),
            url: Some(url.into()),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub external_id: String,
    pub user_id: Uuid,
    pub title: String,
    pub messages: Vec<ChatMessage>,
    pub updated_at: DateTime<Utc>,
}
