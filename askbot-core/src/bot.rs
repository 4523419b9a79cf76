//! Outbound messaging abstraction.
//!
//! [`Bot`] is transport-agnostic; askbot-telegram implements it via teloxide and tests
//! substitute a recording mock.

use crate::error::Result;
use crate::types::ConversationId;
use async_trait::async_trait;

/// Single inline keyboard button: visible label plus the callback token returned on press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub token: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Abstraction for the calls handlers make back into the platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the conversation.
    async fn send_message(&self, conversation: ConversationId, text: &str) -> Result<()>;
    /// Sends a text message with a one-button inline keyboard attached.
    async fn send_message_with_button(
        &self,
        conversation: ConversationId,
        text: &str,
        button: &InlineButton,
    ) -> Result<()>;
    /// Acknowledges a button press so the client stops showing its loading state.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
