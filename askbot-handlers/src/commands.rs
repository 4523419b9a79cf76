//! `/start` and `/help`.

use std::sync::Arc;

use askbot_core::{Bot, Event, EventHandler, HandlerResponse, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::replies::{greeting, HELP_REPLY};

/// Handles [`Event::Command`] for `start` and `help`; other commands are ignored.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl EventHandler for CommandHandler {
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Event::Command(command) = event else {
            return Ok(HandlerResponse::Ignore);
        };

        let reply = match command.command.as_str() {
            "start" => greeting(command.user.first_name.as_deref()),
            "help" => HELP_REPLY.to_string(),
            other => {
                debug!(chat_id = command.conversation.0, command = %other, "Unknown command ignored");
                return Ok(HandlerResponse::Ignore);
            }
        };

        self.bot.send_message(command.conversation, &reply).await?;
        info!(
            chat_id = command.conversation.0,
            command = %command.command,
            "step: command answered"
        );
        Ok(HandlerResponse::Stop)
    }
}
