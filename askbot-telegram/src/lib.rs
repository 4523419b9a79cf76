//! # askbot-telegram
//!
//! Telegram layer: adapters from teloxide updates to [`askbot_core::Event`], the
//! [`askbot_core::Bot`] implementation, minimal config, and the dispatcher runner.
//! No session or reply logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{validate_token, TelegramConfig, DEFAULT_ENV_FILE, TOKEN_ENV};
pub use runner::run_dispatcher;
