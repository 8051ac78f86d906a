//! Interactive chat over the destination database
//!
//! Each line is answered independently; there is no conversation memory.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use tracing::info;

use crate::cli::Verbosity;
use crate::llm::Generator;
use crate::rag::{SelectionParams, TravelAssistant};
use crate::repl::commands::Command;
use crate::repl::input::InputHandler;

/// Chat session coordinator
pub struct ChatSession<G: Generator> {
    assistant: TravelAssistant,
    generator: G,
    input: InputHandler,
    verbosity: Verbosity,
}

impl<G: Generator> ChatSession<G> {
    pub fn new(assistant: TravelAssistant, generator: G, verbosity: Verbosity) -> Result<Self> {
        let input = match history_path() {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(Self {
            assistant,
            generator,
            input,
            verbosity,
        })
    }

    /// Run until `/quit`, Ctrl-C or Ctrl-D
    pub async fn run(&mut self) -> Result<()> {
        self.show_welcome();

        while let Some(line) = self.input.read_line()? {
            if line.is_empty() {
                continue;
            }
            if !self.handle(commands::parse(&line)).await {
                break;
            }
        }

        self.input.save_history()?;
        println!("{}", "Safe travels!".green());
        Ok(())
    }

    /// Returns false when the session should end
    async fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Ask { query } => {
                let pb = self.spinner("Searching destinations...");
                let result = self.assistant.answer(&query, &self.generator).await;
                pb.finish_and_clear();

                match result {
                    Ok(answer) => {
                        if self.verbosity.show_matches() {
                            display::show_matches(&answer.matches);
                        }
                        display::show_answer(&answer.text);
                    }
                    Err(e) => display::show_error(&e.to_string()),
                }
            }
            Command::Plain { query } => {
                let pb = self.spinner("Thinking...");
                let result = self.assistant.ask_ungrounded(&query, &self.generator).await;
                pb.finish_and_clear();

                match result {
                    Ok(text) => display::show_answer(&text),
                    Err(e) => display::show_error(&e.to_string()),
                }
            }
            Command::Search { query } => {
                display::show_selection(&self.assistant.retrieve(&query));
            }
            Command::Prompt { query } => {
                display::show_prompt(&self.assistant.ground(&query));
            }
            Command::TopK { k } => {
                self.assistant.set_params(SelectionParams { top_k: k });
                info!(top_k = k, "selection size changed");
                println!("{}", format!("Using up to {} destinations as context", k).cyan());
            }
            Command::Help => commands::show_help(),
            Command::Exit => return false,
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
            }
        }
        true
    }

    fn spinner(&self, message: &str) -> indicatif::ProgressBar {
        if self.verbosity.show_progress() {
            display::thinking_spinner(message)
        } else {
            indicatif::ProgressBar::hidden()
        }
    }

    fn show_welcome(&self) {
        println!("\n{}", "TravelBuddy chat".bold().cyan());
        println!(
            "{} destinations loaded, up to {} used per answer. Type {} for commands.\n",
            self.assistant.store().len(),
            self.assistant.params().top_k,
            "/help".cyan()
        );
    }
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".travelbuddy").join("history"))
}
