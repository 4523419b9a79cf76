//! Stores the incoming text as the conversation's pending question and offers the "Ask LLM" button.

use std::sync::Arc;

use askbot_core::{
    Bot, CallbackToken, Event, EventHandler, HandlerResponse, InlineButton, Result, SessionStore,
};
use async_trait::async_trait;
use tracing::info;

use crate::replies::{question_prompt, ASK_LLM_BUTTON_LABEL};

/// Handles [`Event::Text`]; ignores every other kind.
pub struct AskQuestionHandler {
    store: Arc<dyn SessionStore>,
    bot: Arc<dyn Bot>,
}

impl AskQuestionHandler {
    pub fn new(store: Arc<dyn SessionStore>, bot: Arc<dyn Bot>) -> Self {
        Self { store, bot }
    }
}

#[async_trait]
impl EventHandler for AskQuestionHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Event::Text(message) = event else {
            return Ok(HandlerResponse::Ignore);
        };

        self.store.put(message.conversation, &message.text).await?;
        info!(
            chat_id = message.conversation.0,
            user_id = message.user.id,
            message_id = %message.id,
            sent_at = %message.created_at,
            question_len = message.text.len(),
            "step: question stored"
        );

        let button = InlineButton::new(
            ASK_LLM_BUTTON_LABEL,
            CallbackToken::ask(message.conversation).to_string(),
        );
        self.bot
            .send_message_with_button(message.conversation, &question_prompt(&message.text), &button)
            .await?;
        info!(chat_id = message.conversation.0, "step: ask button sent");

        Ok(HandlerResponse::Stop)
    }
}
