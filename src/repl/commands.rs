//! Built-in chat commands
//!
//! Anything that does not start with `/` is a travel question.

use colored::*;

/// One line of chat input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Plain question, answered from the destination database
    Ask { query: String },
    /// Question sent without retrieved context
    Plain { query: String },
    /// Show retrieval scores for a query
    Search { query: String },
    /// Show the grounded prompt for a query
    Prompt { query: String },
    /// Change how many destinations are used as context
    TopK { k: usize },
    Help,
    Exit,
    Unknown { input: String },
}

/// Parse a non-empty input line
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Ask {
            query: trimmed.to_string(),
        };
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match (name.to_lowercase().as_str(), arg) {
        ("help" | "h", _) => Command::Help,
        ("exit" | "quit" | "q", _) => Command::Exit,
        ("plain", q) if !q.is_empty() => Command::Plain { query: q.to_string() },
        ("search" | "s", q) if !q.is_empty() => Command::Search { query: q.to_string() },
        ("prompt" | "p", q) if !q.is_empty() => Command::Prompt { query: q.to_string() },
        ("k" | "top-k", n) => match n.parse::<usize>() {
            Ok(k) if k >= 1 => Command::TopK { k },
            _ => Command::Unknown {
                input: trimmed.to_string(),
            },
        },
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

/// Print the command reference
pub fn show_help() {
    println!("\n{}", "Commands:".bold());
    println!("  {}              Ask using the destination database", "<question>".cyan());
    println!("  {}      Ask without retrieved context", "/plain <question>".cyan());
    println!("  {}        Show matching destinations and scores", "/search <query>".cyan());
    println!("  {}        Show the prompt that would be sent", "/prompt <query>".cyan());
    println!("  {}                  Use N destinations as context", "/k <N>".cyan());
    println!("  {}                   Show this help", "/help".cyan());
    println!("  {}                   Leave the chat", "/quit".cyan());
    println!();
}
