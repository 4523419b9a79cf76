//! Mock implementation of [`askbot_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on what would have been sent to Telegram.

use std::sync::Arc;

use askbot_core::{Bot, BotError, ConversationId, InlineButton, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message {
        conversation: ConversationId,
        text: String,
    },
    WithButton {
        conversation: ConversationId,
        text: String,
        button: InlineButton,
    },
    CallbackAnswer {
        callback_id: String,
    },
}

/// Mock Bot that forwards each call as a [`Sent`] record. With `failing`, sends return an error.
pub struct MockBot {
    tx: mpsc::UnboundedSender<Sent>,
    failing: bool,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for sent records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<Sent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx, failing: false }), rx)
    }

    /// MockBot whose message sends fail like a network error; callback answers still succeed.
    pub fn failing() -> (Arc<Self>, mpsc::UnboundedReceiver<Sent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx, failing: true }), rx)
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.failing && !matches!(sent, Sent::CallbackAnswer { .. }) {
            return Err(BotError::Bot("network unreachable".to_string()));
        }
        let _ = self.tx.send(sent);
        Ok(())
    }
}

/// Drains all records sent so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<Sent>) -> Vec<Sent> {
    let mut sent = Vec::new();
    while let Ok(record) = rx.try_recv() {
        sent.push(record);
    }
    sent
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, conversation: ConversationId, text: &str) -> Result<()> {
        self.record(Sent::Message {
            conversation,
            text: text.to_string(),
        })
    }

    async fn send_message_with_button(
        &self,
        conversation: ConversationId,
        text: &str,
        button: &InlineButton,
    ) -> Result<()> {
        self.record(Sent::WithButton {
            conversation,
            text: text.to_string(),
            button: button.clone(),
        })
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.record(Sent::CallbackAnswer {
            callback_id: callback_id.to_string(),
        })
    }
}
