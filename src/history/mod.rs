pub mod model;
pub mod store;

pub use model::{Chat, ChatMessage, MessageKind};
#[cfg(test)]
pub use store::MockChatStore;
pub use store::{ChatStore, HistoryError, MemoryChatStore};
