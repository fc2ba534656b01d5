use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::{conversation::stage::Stage, domain::ChatId};

/// Volatile per-chat stage storage. Lost on restart.
///
/// `Idle` is never stored: a chat without an entry is idle.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<ChatId, Stage>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, chat_id: ChatId) -> Stage {
        self.inner
            .lock()
            .await
            .get(&chat_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn set(&self, chat_id: ChatId, stage: Stage) {
        let mut map = self.inner.lock().await;
        if stage == Stage::Idle {
            map.remove(&chat_id);
        } else {
            map.insert(chat_id, stage);
        }
    }

    /// Remove the chat's session, returning whatever it held.
    pub async fn clear(&self, chat_id: ChatId) -> Stage {
        self.inner
            .lock()
            .await
            .remove(&chat_id)
            .unwrap_or_default()
    }

    pub async fn active_sessions(&self) -> usize {
        self.inner.lock().await.len()
    }
}
