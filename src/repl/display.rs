//! Terminal output shared by one-shot commands and the chat loop

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::corpus::Destination;
use crate::rag::{GroundedPrompt, Match, SelectedRecord};

/// Spinner shown while waiting on the model
pub fn thinking_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn show_selection(selected: &[SelectedRecord<'_, Destination>]) {
    if selected.is_empty() {
        println!("{}", "No relevant destinations found.".yellow());
        return;
    }
    for (rank, s) in selected.iter().enumerate() {
        println!(
            "{}. {} {}",
            rank + 1,
            s.record.destination.bold(),
            format!("(score {:.4}, #{})", s.score, s.position).dimmed()
        );
    }
}

pub fn show_matches(matches: &[Match]) {
    if matches.is_empty() {
        println!("{}", "Context: none".dimmed());
        return;
    }
    let names: Vec<String> = matches
        .iter()
        .map(|m| format!("{} ({:.3})", m.destination, m.score))
        .collect();
    println!("{}", format!("Context: {}", names.join(", ")).dimmed());
}

pub fn show_prompt(prompt: &GroundedPrompt) {
    println!("{}", "--- system ---".cyan());
    println!("{}", prompt.system);
    println!("{}", "--- user ---".cyan());
    println!("{}", prompt.user);
}

pub fn show_answer(text: &str) {
    println!("\n{}\n", text.trim());
}

pub fn show_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
