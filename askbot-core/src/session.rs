//! # Session store
//!
//! Keeps the pending question of every conversation: the last text received, overwritten on
//! each new message and never cleared. [`InMemorySessionStore`] lives for the life of the
//! process; other backends can implement [`SessionStore`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::types::ConversationId;

/// Last text received in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingQuestion {
    pub conversation: ConversationId,
    pub text: String,
    pub stored_at: DateTime<Utc>,
}

impl PendingQuestion {
    pub fn new(conversation: ConversationId, text: impl Into<String>) -> Self {
        Self {
            conversation,
            text: text.into(),
            stored_at: Utc::now(),
        }
    }
}

/// Per-conversation last-value cache, without a removal operation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores `text` for `conversation`, replacing any previous question.
    async fn put(&self, conversation: ConversationId, text: &str) -> Result<()>;

    /// Returns the stored question, or None if nothing was ever stored for `conversation`.
    async fn get(&self, conversation: ConversationId) -> Result<Option<PendingQuestion>>;
}

/// In-memory session store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    questions: Arc<RwLock<HashMap<ConversationId, PendingQuestion>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations with a stored question.
    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, conversation: ConversationId, text: &str) -> Result<()> {
        let mut questions = self.questions.write().await;
        let replaced = questions
            .insert(conversation, PendingQuestion::new(conversation, text))
            .is_some();
        debug!(
            chat_id = conversation.0,
            text_len = text.len(),
            replaced = replaced,
            "step: session store put"
        );
        Ok(())
    }

    async fn get(&self, conversation: ConversationId) -> Result<Option<PendingQuestion>> {
        let questions = self.questions.read().await;
        let found = questions.get(&conversation).cloned();
        debug!(
            chat_id = conversation.0,
            found = found.is_some(),
            "step: session store get"
        );
        Ok(found)
    }
}
