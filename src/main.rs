use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;

use chatline::app::{run_message_mode, run_repl_mode};
use chatline::cli::Cli;
use chatline::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = ClientConfig::from_cli(&cli);

    if let Some(message) = cli.message.clone() {
        return run_message_mode(config, &message).await;
    }

    run_repl_mode(&cli, config).await
}
