//! Wraps teloxide::Bot and implements [`askbot_core::Bot`]. Production code sends through Telegram;
//! tests substitute another Bot impl.

use askbot_core::{Bot as CoreBot, BotError, ConversationId, InlineButton, Result};
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

/// Thin wrapper around teloxide::Bot that implements askbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn keyboard(button: &InlineButton) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([[InlineKeyboardButton::callback(
        button.label.clone(),
        button.token.clone(),
    )]])
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, conversation: ConversationId, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(conversation.0), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_button(
        &self,
        conversation: ConversationId,
        text: &str,
        button: &InlineButton,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(conversation.0), text.to_string())
            .reply_markup(keyboard(button))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
