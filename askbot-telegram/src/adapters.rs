//! Adapters from Telegram (teloxide) types to askbot_core types.
//! Depends only on teloxide and askbot_core type definitions.

use askbot_core::{
    parse_command, CallbackPress, CommandMessage, ConversationId, Event, TextMessage, ToCoreEvent,
    User,
};
use tracing::debug;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message. Text becomes [`Event::Text`], `/commands` become
/// [`Event::Command`]. Messages without text and commands addressed to another bot
/// (`/help@other_bot`) are not routable.
pub struct TelegramMessageWrapper<'a> {
    pub message: &'a teloxide::types::Message,
    /// Username of this bot, as returned by getMe.
    pub bot_username: Option<&'a str>,
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Wrapper that accepts commands addressed to any bot.
    pub fn new(message: &'a teloxide::types::Message) -> Self {
        Self {
            message,
            bot_username: None,
        }
    }

    /// Wrapper that only routes commands unaddressed or addressed to `bot_username`.
    pub fn for_bot(message: &'a teloxide::types::Message, bot_username: Option<&'a str>) -> Self {
        Self {
            message,
            bot_username,
        }
    }
}

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> Option<Event> {
        let text = self.message.text()?;
        let conversation = ConversationId(self.message.chat.id.0);

        if let Some(parsed) = parse_command(text) {
            if !parsed.is_for(self.bot_username) {
                debug!(
                    chat_id = conversation.0,
                    command = %parsed.command,
                    addressee = ?parsed.addressee,
                    "Command addressed to another bot"
                );
                return None;
            }
            return Some(Event::Command(CommandMessage {
                conversation,
                user: self.sender(),
                command: parsed.command,
            }));
        }

        Some(Event::Text(TextMessage {
            id: self.message.id.to_string(),
            conversation,
            user: self.sender(),
            text: text.to_string(),
            created_at: self.message.date,
        }))
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Sender of the message; channel posts have none and map to a default user.
    fn sender(&self) -> User {
        self.message
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or_default()
    }
}

/// Wraps a teloxide CallbackQuery for conversion to [`Event::Callback`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_event(&self) -> Option<Event> {
        Some(Event::Callback(CallbackPress {
            id: self.0.id.to_string(),
            conversation: self
                .0
                .message
                .as_ref()
                .map(|m| ConversationId(m.chat().id.0)),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            data: self.0.data.clone(),
        }))
    }
}
