#![allow(dead_code)] // each test binary uses a different subset

pub mod mock_bot;

use askbot_core::{CallbackPress, CommandMessage, ConversationId, Event, TextMessage, User};
use chrono::Utc;

pub fn user(first_name: Option<&str>) -> User {
    User {
        id: 1001,
        username: Some("asker".to_string()),
        first_name: first_name.map(str::to_string),
        last_name: None,
    }
}

pub fn text_event(conversation: i64, text: &str) -> Event {
    Event::Text(TextMessage {
        id: "1".to_string(),
        conversation: ConversationId(conversation),
        user: user(Some("Ann")),
        text: text.to_string(),
        created_at: Utc::now(),
    })
}

pub fn command_event(conversation: i64, command: &str, first_name: Option<&str>) -> Event {
    Event::Command(CommandMessage {
        conversation: ConversationId(conversation),
        user: user(first_name),
        command: command.to_string(),
    })
}

pub fn callback_event(conversation: Option<i64>, data: Option<&str>) -> Event {
    Event::Callback(CallbackPress {
        id: "cb-1".to_string(),
        conversation: conversation.map(ConversationId),
        user: user(Some("Ann")),
        data: data.map(str::to_string),
    })
}
