use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

use crate::api::HttpBackend;
use crate::chat::ChatSession;
use crate::cli::Cli;
use crate::config::ClientConfig;
use crate::logging::ConversationLogger;
use crate::models::{ChatMessage, Role};
use crate::ui::ChatUi;

/// Renders session events to the terminal.
pub struct TerminalUi;

impl TerminalUi {
    fn print_message(&self, message: &ChatMessage) {
        let tag = match message.role {
            Role::User => "You:".bright_green().bold(),
            Role::Bot => "Bot:".bright_cyan().bold(),
        };
        println!(
            "{} {} {}",
            tag,
            message.text,
            short_time(&message.timestamp).bright_black()
        );
    }
}

fn short_time(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.format("[%H:%M]").to_string())
        .unwrap_or_default()
}

const TYPING_INDICATOR: &str = "… thinking";

impl ChatUi for TerminalUi {
    fn message_added(&mut self, message: &ChatMessage) {
        self.print_message(message);
    }

    fn transcript_replaced(&mut self, transcript: &[ChatMessage]) {
        for message in transcript {
            self.print_message(message);
        }
    }

    fn typing_started(&mut self) {
        print!("{}", TYPING_INDICATOR.bright_black());
        let _ = io::stdout().flush();
    }

    fn typing_stopped(&mut self) {
        // Erase the indicator in place; the reply or error follows.
        print!("\r{}\r", " ".repeat(TYPING_INDICATOR.chars().count() + 2));
        let _ = io::stdout().flush();
    }

    fn notify_error(&mut self, message: &str) {
        eprintln!("{} {}", "✖".bright_red().bold(), message.red());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} {} ", prompt.yellow(), "[y/N]".bright_black());
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Run interactive REPL mode
pub async fn run_repl_mode(cli: &Cli, config: ClientConfig) -> Result<()> {
    println!(
        "{}",
        "chatline - talk to your chat backend from the terminal"
            .bright_cyan()
            .bold()
    );
    println!("{}", format!("Backend: {}", config.base_url).bright_black());
    println!(
        "{}",
        "Type a message and press Enter. '/help' lists commands, 'exit' or 'quit' leaves.\n"
            .bright_black()
    );

    let backend = HttpBackend::new(&config)?;
    let mut session = ChatSession::new(backend, TerminalUi);

    if let Some(log_dir) = &cli.log_dir {
        session.logger = match ConversationLogger::new(log_dir).await {
            Ok(logger) => {
                if config.verbose {
                    eprintln!("Logging conversation to {}", logger.path().display());
                }
                Some(logger)
            }
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        };
    }

    session.initialize(cli.no_history).await;

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if line == "/help" {
                    print_help();
                    continue;
                }

                if line == "/clear" {
                    session.clear_chat().await;
                    continue;
                }

                if line == "/export" {
                    if let Some(path) = session.export_chat(&config.export_dir).await {
                        println!(
                            "{} Exported transcript to {}",
                            "💾".bright_green(),
                            path.display()
                        );
                    }
                    continue;
                }

                if line == "/reload" {
                    session.load_history().await;
                    continue;
                }

                if line.starts_with('/') {
                    eprintln!(
                        "{} Unknown command: {}. Try /help.",
                        "✖".bright_red(),
                        line
                    );
                    continue;
                }

                session.send_message(line).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C abandons the input line, nothing else.
                println!("{}", "^C".bright_yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    if let Some(logger) = &mut session.logger {
        logger.shutdown().await;
    }

    Ok(())
}

fn print_help() {
    println!("{} Commands:", "💡".bright_cyan());
    println!("  /clear   - wipe the chat history (asks first)");
    println!("  /export  - write the transcript to a JSON file");
    println!("  /reload  - re-fetch stored history from the backend");
    println!("  /help    - show this help");
    println!("  exit     - leave (quit and Ctrl-D work too)");
}
