//! Minimal config: bot token, optional API URL and log file path.
//! Loaded from env: TELEGRAM_BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use anyhow::{Context, Result};
use std::env;

/// Env var holding the bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Env file read at startup; keep it out of version control.
pub const DEFAULT_ENV_FILE: &str = ".secrets/bot-token.env";

const DEFAULT_LOG_FILE: &str = "logs/askbot.log";

/// Telegram connectivity and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: TELEGRAM_BOT_TOKEN required; TELEGRAM_API_URL and LOG_FILE optional.
    /// `token` overrides TELEGRAM_BOT_TOKEN when given.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var(TOKEN_ENV).map_err(|_| anyhow::anyhow!("{} not set", TOKEN_ENV))?,
        };
        validate_token(&bot_token)?;

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds config with the given token; other fields None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Log file path, `logs/askbot.log` unless LOG_FILE is set.
    pub fn log_file(&self) -> &str {
        self.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }

    /// Creates the teloxide Bot, pointed at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

/// Checks the `<numeric bot id>:<secret>` shape of a Bot API token.
pub fn validate_token(token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        anyhow::bail!("{} is empty", TOKEN_ENV);
    }
    match token.split_once(':') {
        Some((id, secret))
            if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) && !secret.is_empty() =>
        {
            Ok(())
        }
        _ => anyhow::bail!("{} is malformed, expected <bot id>:<secret>", TOKEN_ENV),
    }
}
