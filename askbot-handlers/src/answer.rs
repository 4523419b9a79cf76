//! Replies with the stored question when the "Ask LLM" button is pressed.

use std::sync::Arc;

use askbot_core::{
    Bot, CallbackToken, Event, EventHandler, HandlerError, HandlerResponse, Result, SessionStore,
};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::replies::NO_QUESTION_REPLY;

/// Handles [`Event::Callback`]; ignores every other kind.
///
/// Every press is acknowledged first. Presses with a token other than the ask token are left
/// to later handlers. The conversation named by the token wins over the one of the message
/// carrying the button.
pub struct AnswerHandler {
    store: Arc<dyn SessionStore>,
    bot: Arc<dyn Bot>,
}

impl AnswerHandler {
    pub fn new(store: Arc<dyn SessionStore>, bot: Arc<dyn Bot>) -> Self {
        Self { store, bot }
    }
}

#[async_trait]
impl EventHandler for AnswerHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Event::Callback(press) = event else {
            return Ok(HandlerResponse::Ignore);
        };

        self.bot.answer_callback(&press.id).await?;

        let token = press.data.as_deref().and_then(CallbackToken::parse);
        let Some(token) = token.filter(CallbackToken::is_ask) else {
            debug!(callback_id = %press.id, data = ?press.data, "Callback token is not an ask token");
            return Ok(HandlerResponse::Continue);
        };

        let Some(conversation) = token.conversation.or(press.conversation) else {
            warn!(callback_id = %press.id, user_id = press.user.id, "Ask callback without conversation");
            return Err(HandlerError::NoConversation.into());
        };

        match self.store.get(conversation).await? {
            Some(question) => {
                self.bot.send_message(conversation, &question.text).await?;
                info!(
                    chat_id = conversation.0,
                    stored_at = %question.stored_at,
                    "step: stored question sent back"
                );
            }
            None => {
                warn!(chat_id = conversation.0, "No stored question for conversation");
                self.bot.send_message(conversation, NO_QUESTION_REPLY).await?;
            }
        }

        Ok(HandlerResponse::Stop)
    }
}
