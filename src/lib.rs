//! TravelBuddy - Grounded Travel Assistant
//!
//! Answers travel questions from a local destination database. Queries are
//! matched against the corpus with TF-IDF cosine similarity, the best
//! matches are rendered into a context section, and a chat model is asked
//! to answer using that context only.
//!
//! # Architecture
//!
//! - **corpus**: destination records and the JSON-backed store
//! - **rag**: tokenizer, TF-IDF index, selection, prompt assembly, pipeline
//! - **llm**: chat message types and the OpenAI-compatible client
//! - **tools**: mock flight, weather and currency tools
//! - **cli / repl / telemetry / config**: the command-line surface

pub mod errors;
pub mod config;
pub mod corpus;
pub mod rag;
pub mod llm;
pub mod tools;

// Command-line surface
pub mod cli;
pub mod repl;
pub mod telemetry;

// Re-export commonly used types
pub use config::Config;
pub use corpus::{Destination, Record, RecordStore};
pub use errors::{Result, TravelError};
pub use llm::{ChatClient, ChatMessage, Generator};
pub use rag::{Answer, GroundedPrompt, SelectionParams, TravelAssistant};
pub use tools::ToolRuntime;
