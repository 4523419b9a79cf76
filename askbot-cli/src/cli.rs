//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "askbot")]
#[command(about = "Telegram bot that stores your question and echoes it back on \"Ask LLM\"", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (token from env file / TELEGRAM_BOT_TOKEN unless --token is given).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        /// Env file loaded before reading the environment.
        #[arg(long, default_value = askbot_telegram::DEFAULT_ENV_FILE)]
        env_file: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["askbot", "run"]).unwrap();
        match cli.command {
            Commands::Run { token, env_file } => {
                assert!(token.is_none());
                assert_eq!(env_file, ".secrets/bot-token.env");
            }
        }
    }

    #[test]
    fn test_run_with_token_and_env_file() {
        let cli =
            Cli::try_parse_from(["askbot", "run", "-t", "1:abc", "--env-file", "bot.env"]).unwrap();
        match cli.command {
            Commands::Run { token, env_file } => {
                assert_eq!(token.as_deref(), Some("1:abc"));
                assert_eq!(env_file, "bot.env");
            }
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["askbot"]).is_err());
    }
}
