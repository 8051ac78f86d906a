//! TravelBuddy - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde_json::json;
use tracing::debug;
use travelbuddy::{
    cli::{Args, Commands, Verbosity},
    config::Config,
    llm::ChatClient,
    rag::TravelAssistant,
    repl::{display, ChatSession},
    telemetry,
    tools::ToolRuntime,
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    args.apply_overrides(&mut config);
    config.validate().context("Invalid settings")?;

    telemetry::init(verbosity, &config.logging.filter);
    debug!(verbosity = verbosity.as_str(), "configuration loaded");

    match &args.command {
        Commands::Ask { query, no_rag } => {
            let assistant = load_assistant(&config)?;
            let client = ChatClient::from_config(&config.model)?;
            run_ask(&assistant, &client, query, *no_rag, verbosity).await?;
        }
        Commands::Search { query } => {
            display::show_selection(&load_assistant(&config)?.retrieve(query));
        }
        Commands::Prompt { query } => {
            display::show_prompt(&load_assistant(&config)?.ground(query));
        }
        Commands::Chat => {
            let assistant = load_assistant(&config)?;
            let client = ChatClient::from_config(&config.model)?;
            ChatSession::new(assistant, client, verbosity)?.run().await?;
        }
        Commands::Flights {
            origin,
            destination,
            date,
        } => run_tool(
            "search_flights",
            json!({"origin": origin, "destination": destination, "departure_date": date}),
        )?,
        Commands::Weather { location, days } => {
            run_tool("get_weather", json!({"location": location, "days": days}))?
        }
        Commands::Convert { amount, from, to } => run_tool(
            "convert_currency",
            json!({"amount": amount, "from_currency": from, "to_currency": to}),
        )?,
        Commands::Tools => show_tools(&ToolRuntime::new()),
        Commands::Config => show_config(&config)?,
    }

    Ok(())
}

fn load_assistant(config: &Config) -> Result<TravelAssistant> {
    TravelAssistant::from_config(&config.retrieval).with_context(|| {
        format!(
            "Failed to load destinations from {}",
            config.retrieval.corpus_path.display()
        )
    })
}

async fn run_ask(
    assistant: &TravelAssistant,
    client: &ChatClient,
    query: &str,
    no_rag: bool,
    verbosity: Verbosity,
) -> Result<()> {
    let pb = if verbosity.show_progress() {
        display::thinking_spinner(&format!("Asking {}...", client.model()))
    } else {
        indicatif::ProgressBar::hidden()
    };

    let result = if no_rag {
        assistant.ask_ungrounded(query, client).await.map(|text| (text, None))
    } else {
        assistant
            .answer(query, client)
            .await
            .map(|answer| (answer.text, Some(answer.matches)))
    };
    pb.finish_and_clear();

    let (text, matches) = result.context("Model request failed")?;
    if let (Some(matches), true) = (&matches, verbosity.show_matches()) {
        display::show_matches(matches);
    }
    display::show_answer(&text);
    Ok(())
}

fn run_tool(tool: &str, tool_args: serde_json::Value) -> Result<()> {
    let result = ToolRuntime::new().execute(tool, &tool_args)?;
    println!("{}", result.output);
    Ok(())
}

fn show_tools(runtime: &ToolRuntime) {
    println!("\n{}", "Available tools:".bold());
    for schema in runtime.registry().schemas() {
        println!("  {} - {}", schema.name.cyan(), schema.description);
        println!("      args: {}", schema.required().join(", "));
    }
    println!();
}

fn show_config(config: &Config) -> Result<()> {
    if let Ok(path) = Config::config_path() {
        println!("{}", format!("# {}", path.display()).dimmed());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
