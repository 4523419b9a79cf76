//! Core types: conversation id, user, inbound events, handler response, and EventHandler trait.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque key of a chat session, as provided by the transport (Telegram chat id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConversationId(pub i64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ConversationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Sender identity (id, username, names).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Plain text message (not a command) sent by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextMessage {
    pub id: String,
    pub conversation: ConversationId,
    pub user: User,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Bot command such as `/start`. `command` is lowercase, without the slash or `@botname` suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    pub conversation: ConversationId,
    pub user: User,
    pub command: String,
}

/// Inline button press.
///
/// `conversation` is the chat of the message carrying the button; it is absent when that
/// message is no longer accessible. `data` is the callback token attached to the button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackPress {
    pub id: String,
    pub conversation: Option<ConversationId>,
    pub user: User,
    pub data: Option<String>,
}

/// Inbound update, already converted from the transport's representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Text(TextMessage),
    Command(CommandMessage),
    Callback(CallbackPress),
}

/// Discriminant of [`Event`]; key of the router's registration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Text,
    Command,
    Callback,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Text => "text",
            EventKind::Command => "command",
            EventKind::Callback => "callback",
        };
        f.write_str(name)
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Text(_) => EventKind::Text,
            Event::Command(_) => EventKind::Command,
            Event::Callback(_) => EventKind::Callback,
        }
    }

    /// Conversation the event belongs to, if known.
    pub fn conversation(&self) -> Option<ConversationId> {
        match self {
            Event::Text(m) => Some(m.conversation),
            Event::Command(c) => Some(c.conversation),
            Event::Callback(q) => q.conversation,
        }
    }
}

/// Command found at the start of a message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercase name without the slash.
    pub command: String,
    /// Bot named by a `/cmd@bot` suffix; None when the command is not addressed.
    pub addressee: Option<String>,
}

impl ParsedCommand {
    /// Whether the command is meant for the bot called `bot_username`.
    ///
    /// Unaddressed commands are for every bot. An addressed command matches the username
    /// case-insensitively; when the own username is unknown, addressed commands are accepted.
    pub fn is_for(&self, bot_username: Option<&str>) -> bool {
        match (&self.addressee, bot_username) {
            (None, _) | (Some(_), None) => true,
            (Some(addressee), Some(own)) => addressee.eq_ignore_ascii_case(own),
        }
    }
}

/// Parses `/cmd@bot args`. Returns None when `text` is not a command; arguments are dropped.
pub fn parse_command(text: &str) -> Option<ParsedCommand> {
    let rest = text.trim_start().strip_prefix('/')?;
    let head = rest.split(char::is_whitespace).next().unwrap_or(rest);
    let (name, addressee) = match head.split_once('@') {
        Some((name, bot)) => (name, Some(bot).filter(|b| !b.is_empty())),
        None => (head, None),
    };
    if name.is_empty() {
        return None;
    }
    Some(ParsedCommand {
        command: name.to_lowercase(),
        addressee: addressee.map(str::to_string),
    })
}

/// Handler result for the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Handled; later handlers for the same kind still run.
    Continue,
    /// Handled; stop dispatching this event.
    Stop,
    /// Not for this handler; try the next one.
    Ignore,
}

/// Converts a transport-specific update into a core [`Event`]. None means "not routable".
pub trait ToCoreEvent: Send + Sync {
    fn to_event(&self) -> Option<Event>;
}

/// Handles one routed event.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &Event) -> crate::error::Result<HandlerResponse>;
}
