use std::sync::Arc;

use crate::config::Config;
use crate::llm::LlmProvider;
use crate::services::ChatService;
use crate::store::ConversationStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<ConversationStore>,
    pub chat: ChatService,
}

impl AppState {
    pub fn new(config: Config, llm: LlmProvider) -> Self {
        let store = Arc::new(ConversationStore::new());
        let chat = ChatService::new(store.clone(), llm);

        Self {
            config: Arc::new(config),
            store,
            chat,
        }
    }
}
