//! Tool execution types
//!
//! Results and schemas shared by the mock travel tools.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of tool execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that was executed
    pub tool: String,

    /// Structured output (the tool's typed record as JSON)
    pub data: serde_json::Value,

    /// Human-readable rendering of `data`
    pub output: String,

    /// Execution duration in milliseconds
    pub duration_ms: u64,
}

impl ToolResult {
    /// Create result from a typed record and its rendering
    pub fn new<T: Serialize>(
        tool: impl Into<String>,
        record: &T,
        output: String,
        duration: Duration,
    ) -> crate::errors::Result<Self> {
        Ok(Self {
            tool: tool.into(),
            data: serde_json::to_value(record)?,
            output,
            duration_ms: duration.as_millis() as u64,
        })
    }
}

/// Tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,

    /// Tool description
    pub description: String,

    /// Parameter schema (JSON Schema)
    pub parameters: serde_json::Value,
}

impl ToolSchema {
    /// Create new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names of required parameters
    pub fn required(&self) -> Vec<&str> {
        self.parameters["required"]
            .as_array()
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Tool execution statistics
#[derive(Debug, Clone, Default)]
pub struct ToolStats {
    /// Total executions
    pub total_executions: u64,

    /// Failed executions
    pub failed_executions: u64,

    /// Total execution time (ms)
    pub total_duration_ms: u64,
}

impl ToolStats {
    /// Record successful execution
    pub fn record_success(&mut self, duration_ms: u64) {
        self.total_executions += 1;
        self.total_duration_ms += duration_ms;
    }

    /// Record failed execution
    pub fn record_failure(&mut self) {
        self.total_executions += 1;
        self.failed_executions += 1;
    }

    /// Calculate success rate
    pub fn success_rate(&self) -> f64 {
        if self.total_executions == 0 {
            0.0
        } else {
            (self.total_executions - self.failed_executions) as f64 / self.total_executions as f64
        }
    }
}
