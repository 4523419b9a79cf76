//! # askbot-core
//!
//! Core types and traits for askbot: [`Bot`], [`EventHandler`], [`SessionStore`], the [`Event`]
//! variants delivered by a transport, callback tokens, and tracing initialization.
//! Transport-agnostic; used by event-router, askbot-handlers and askbot-telegram.

pub mod bot;
pub mod callback;
pub mod error;
pub mod logger;
pub mod session;
pub mod types;

pub use bot::{Bot, InlineButton};
pub use callback::{CallbackToken, ASK_LLM_ACTION};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use session::{InMemorySessionStore, PendingQuestion, SessionStore};
pub use types::{
    parse_command, CallbackPress, CommandMessage, ConversationId, Event, EventHandler, EventKind,
    HandlerResponse, ParsedCommand, TextMessage, ToCoreEvent, User,
};
