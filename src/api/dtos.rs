use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ErrorKind;
use crate::history::Chat;

const MAX_URL_LEN: usize = 2048;
const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: String,
    #[serde(default)]
    pub chat_id: Option<String>,
}

impl SummarizeRequest {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("URL is required".to_string());
        }
        if url.len() > MAX_URL_LEN {
            return Err("URL too long".to_string());
        }
        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(_) => return Err("URL must use http or https".to_string()),
            Err(_) => return Err("Invalid URL format".to_string()),
        }
        if let Some(chat_id) = &self.chat_id
            && chat_id.trim().is_empty()
        {
            return Err("chat_id must not be blank".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub title: String,
    pub chat_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameChatRequest {
    pub title: String,
}

impl RenameChatRequest {
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err("Title too long".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenameChatResponse {
    pub chat_id: String,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub chat_id: String,
    pub title: String,
    pub messages: Vec<crate::history::ChatMessage>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            chat_id: chat.external_id,
            title: chat.title,
            messages: chat.messages,
            updated_at: chat.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub chats: Vec<ChatResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            kind: None,
        }
    }

    pub fn with_kind(error: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            error: error.into(),
            kind: Some(kind),
        }
    }
}
