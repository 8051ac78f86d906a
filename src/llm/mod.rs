//! Generative model access
//!
//! The retrieval core only produces prompts; this module is the thin,
//! swappable collaborator that turns role-tagged messages into text.

pub mod client;
pub mod types;

pub use client::{ChatClient, Generator, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use types::{ChatMessage, Role};
