//! Tool runtime
//!
//! Validates arguments against the registry and dispatches to the mock
//! implementations. All tools are synchronous and side-effect free.

use serde_json::Value;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{debug, warn};

use crate::errors::{Result, TravelError};
use crate::tools::implementations::{currency, flights, weather};
use crate::tools::registry::ToolRegistry;
use crate::tools::types::{ToolResult, ToolStats};

/// Default forecast length for `get_weather`
const DEFAULT_FORECAST_DAYS: usize = 3;

/// Tool runtime coordinator
#[derive(Debug, Default)]
pub struct ToolRuntime {
    registry: ToolRegistry,
    stats: Mutex<ToolStats>,
}

impl ToolRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a tool by name with JSON arguments
    pub fn execute(&self, tool: &str, args: &Value) -> Result<ToolResult> {
        let start = Instant::now();
        let result = self.execute_once(tool, args, start);

        let mut stats = self.stats.lock().unwrap_or_else(|e| e.into_inner());
        match &result {
            Ok(r) => {
                debug!(tool, duration_ms = r.duration_ms, "tool executed");
                stats.record_success(r.duration_ms);
            }
            Err(e) => {
                warn!(tool, error = %e, "tool failed");
                stats.record_failure();
            }
        }
        result
    }

    fn execute_once(&self, tool: &str, args: &Value, start: Instant) -> Result<ToolResult> {
        let schema = self.registry.get(tool).ok_or_else(|| TravelError::ToolError {
            tool: tool.to_string(),
            reason: "unknown tool".to_string(),
        })?;

        for name in schema.required() {
            if args.get(name).map_or(true, Value::is_null) {
                return Err(TravelError::ToolError {
                    tool: tool.to_string(),
                    reason: format!("missing required argument '{}'", name),
                });
            }
        }

        match tool {
            "search_flights" => {
                let offers = flights::search_flights(
                    str_arg(tool, args, "origin")?,
                    str_arg(tool, args, "destination")?,
                    str_arg(tool, args, "departure_date")?,
                )?;
                let output = flights::format_flights(&offers);
                ToolResult::new(tool, &offers, output, start.elapsed())
            }
            "get_weather" => {
                let days = match args.get("days") {
                    None | Some(Value::Null) => DEFAULT_FORECAST_DAYS,
                    Some(v) => v.as_u64().ok_or_else(|| bad_arg(tool, "days"))? as usize,
                };
                let info = weather::get_weather_info(str_arg(tool, args, "location")?, days);
                let output = weather::format_weather(&info);
                ToolResult::new(tool, &info, output, start.elapsed())
            }
            "convert_currency" => {
                let amount = args["amount"].as_f64().ok_or_else(|| bad_arg(tool, "amount"))?;
                let conversion = currency::convert_currency(
                    amount,
                    str_arg(tool, args, "from_currency")?,
                    str_arg(tool, args, "to_currency")?,
                );
                let output = currency::format_currency_conversion(&conversion);
                ToolResult::new(tool, &conversion, output, start.elapsed())
            }
            _ => Err(TravelError::ToolError {
                tool: tool.to_string(),
                reason: "registered but not implemented".to_string(),
            }),
        }
    }

    /// Get tool registry
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.registry.tool_names()
    }

    /// Check if tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Snapshot of execution statistics
    pub fn stats(&self) -> ToolStats {
        self.stats.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

fn str_arg<'a>(tool: &str, args: &'a Value, name: &str) -> Result<&'a str> {
    args[name].as_str().ok_or_else(|| bad_arg(tool, name))
}

fn bad_arg(tool: &str, name: &str) -> TravelError {
    TravelError::ToolError {
        tool: tool.to_string(),
        reason: format!("argument '{}' has the wrong type", name),
    }
}
