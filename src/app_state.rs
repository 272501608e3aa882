use std::sync::Arc;

use crate::{
    config::Config,
    fetcher::FetchError,
    history::{ChatStore, MemoryChatStore},
    identity::{IdentityResolver, JwtIdentityResolver},
    service::SummarizeService,
};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SummarizeService>,
    pub chats: Arc<dyn ChatStore>,
    pub identity: Arc<dyn IdentityResolver>,
}

impl AppState {
    /// Default wiring: shared fetcher settings from `config`, in-memory
    /// history and JWT identity.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Ok(Self {
            service: Arc::new(SummarizeService::from_config(config)?),
            chats: Arc::new(MemoryChatStore::new()),
            identity: Arc::new(JwtIdentityResolver::new(config.jwt_secret())),
        })
    }

    pub fn with_chat_store(mut self, chats: Arc<dyn ChatStore>) -> Self {
        self.chats = chats;
        self
    }

    #[cfg(test)]
    pub(crate) fn for_tests(jwt_secret: &str) -> Self {
        let config = Config::default();
        Self {
            service: Arc::new(
                SummarizeService::from_config(&config).expect("default fetcher builds"),
            ),
            chats: Arc::new(MemoryChatStore::new()),
            identity: Arc::new(JwtIdentityResolver::new(jwt_secret)),
        }
    }
}
