//! CLI definition and dispatch

use crate::config::AppConfig;
use crate::personas;
use crate::session::ChatSession;
use crate::{assistant, server};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reserva - conversational booking assistant
#[derive(Parser)]
#[command(name = "reserva", version, about)]
pub struct Cli {
    /// Subcommand (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP/WebSocket server
    Serve,
    /// Chat with the assistant on stdin/stdout
    Chat,
}

/// Dispatch the parsed CLI
pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run(config).await,
        Command::Chat => chat_repl(config).await,
    }
}

/// Interactive stdin/stdout chat loop
async fn chat_repl(config: AppConfig) -> Result<()> {
    let orchestrator = assistant::build_orchestrator(&config)?;
    let mut session = ChatSession::new(personas::RECEPTIONIST);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        match session.send(&orchestrator, line).await {
            Ok(reply) => println!("{reply}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("Enter your message: ");
    std::io::stdout().flush()?;
    Ok(())
}
