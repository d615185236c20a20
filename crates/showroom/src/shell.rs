// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `showroom shell` command implementation.
//!
//! Interactive REPL against a single conversation session with a colored
//! prompt and readline history. `/clear` resets the conversation,
//! `/history` prints it, `/quit` exits.

use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use showroom_agent::{load_system_prompt, ChatSession, TurnOptions};
use showroom_anthropic::AnthropicProvider;
use showroom_catalog::Catalog;
use showroom_config::ShowroomConfig;
use showroom_core::{ChatProvider, ChatRole, ShowroomError};
use showroom_engine::QueryEngine;
use showroom_tools::dealership_registry;

/// Runs the interactive REPL.
pub async fn run_shell(config: ShowroomConfig) -> Result<(), ShowroomError> {
    let engine = Arc::new(QueryEngine::new(Arc::new(Catalog::sample())));
    let registry = Arc::new(dealership_registry(engine));

    let provider: Arc<dyn ChatProvider> =
        Arc::new(AnthropicProvider::new(&config).inspect_err(|_| {
            eprintln!(
                "error: Anthropic API key required. Set anthropic.api_key in showroom.toml \
                 or the ANTHROPIC_API_KEY environment variable."
            );
        })?);

    let system_prompt = load_system_prompt(&config.agent).await;
    let mut session = ChatSession::new(
        provider,
        registry,
        TurnOptions::from_config(&config),
        &system_prompt,
    );

    let mut rl = DefaultEditor::new()
        .map_err(|e| ShowroomError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "showroom shell".bold().green());
    println!(
        "Type {} to exit, {} to reset, {} to print the conversation.\n",
        "/quit".yellow(),
        "/clear".yellow(),
        "/history".yellow()
    );

    let prompt = format!("{}> ", config.agent.name.green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "/quit" | "/exit" => break,
                    "/clear" => {
                        session.clear();
                        println!("{}", "conversation cleared".dimmed());
                    }
                    "/history" => print_history(&session),
                    _ => {
                        let reply = session.submit(trimmed).await;
                        println!("{reply}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Prints the conversation so far, system message and tool plumbing
/// omitted.
fn print_history(session: &ChatSession) {
    for message in session.history() {
        match message.role {
            ChatRole::User => println!("{} {}", "you:".cyan(), message.content),
            ChatRole::Assistant if !message.content.is_empty() => {
                println!("{} {}", "bot:".green(), message.content)
            }
            _ => {}
        }
    }
}
