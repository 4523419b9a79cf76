//! askbot: stores each text message and echoes it back when "Ask LLM" is pressed.

use anyhow::Result;
use askbot_cli::{run, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, env_file } => run(token, &env_file).await,
    }
}
