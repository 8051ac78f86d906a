//! Mock travel tools
//!
//! Canned flight, weather and currency services with JSON schemas, so a
//! caller (or a model) can invoke them by name.

pub mod types;
pub mod registry;
pub mod runtime;
pub mod implementations;

// Re-export commonly used types
pub use types::{ToolResult, ToolSchema, ToolStats};
pub use registry::ToolRegistry;
pub use runtime::ToolRuntime;
