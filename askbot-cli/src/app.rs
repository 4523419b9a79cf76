//! Startup: env file, config, tracing, and wiring of store, handlers and router.

use std::io::ErrorKind;
use std::sync::Arc;

use anyhow::{Context, Result};
use askbot_core::{init_tracing, Bot, EventKind, InMemorySessionStore, SessionStore};
use askbot_handlers::{AnswerHandler, AskQuestionHandler, CommandHandler};
use askbot_telegram::{run_dispatcher, TelegramBotAdapter, TelegramConfig};
use chrono::Local;
use event_router::EventRouter;
use tracing::info;

/// Loads `path` into the process environment. A missing file is not an error (the variables
/// may already be set); returns whether the file was read.
pub fn load_env_file(path: &str) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("Failed to load env file {}", path)),
    }
}

/// Registers the command, question and answer handlers, all sharing `store`.
pub fn build_router(store: Arc<dyn SessionStore>, bot: Arc<dyn Bot>) -> EventRouter {
    EventRouter::new()
        .add_handler(EventKind::Command, Arc::new(CommandHandler::new(bot.clone())))
        .add_handler(
            EventKind::Text,
            Arc::new(AskQuestionHandler::new(store.clone(), bot.clone())),
        )
        .add_handler(EventKind::Callback, Arc::new(AnswerHandler::new(store, bot)))
}

/// Runs the bot until Ctrl-C. Fails before polling when the token is missing or rejected.
pub async fn run(token: Option<String>, env_file: &str) -> Result<()> {
    let env_file_loaded = load_env_file(env_file)?;

    let config = TelegramConfig::from_env(token).context("Failed to load bot configuration")?;

    let log_file = config.log_file().to_string();
    init_tracing(&log_file)?;
    info!(
        start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"),
        log_file = %log_file,
        env_file = %env_file,
        env_file_loaded = env_file_loaded,
        "askbot starting"
    );

    let bot = config.build_bot()?;
    let adapter: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let router = build_router(store, adapter);

    run_dispatcher(bot, router).await
}
