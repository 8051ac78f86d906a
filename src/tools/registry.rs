//! Tool registry with JSON schemas
//!
//! Tools:
//! - search_flights: Mock flight offers between two cities
//! - get_weather: Mock current weather and forecast
//! - convert_currency: Mock exchange-rate conversion

use crate::tools::types::ToolSchema;
use serde_json::json;
use std::collections::BTreeMap;

/// Tool registry
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to schema
    tools: BTreeMap<String, ToolSchema>,
}

impl ToolRegistry {
    /// Create new tool registry with all tools
    pub fn new() -> Self {
        let mut registry = Self {
            tools: BTreeMap::new(),
        };

        registry.register_search_flights();
        registry.register_get_weather();
        registry.register_convert_currency();

        registry
    }

    fn register_search_flights(&mut self) {
        let schema = ToolSchema::new(
            "search_flights",
            "Search flights between two cities. All prices are in USD.",
            json!({
                "type": "object",
                "properties": {
                    "origin": {
                        "type": "string",
                        "description": "Departure city"
                    },
                    "destination": {
                        "type": "string",
                        "description": "Arrival city"
                    },
                    "departure_date": {
                        "type": "string",
                        "format": "date",
                        "description": "Departure date (YYYY-MM-DD)"
                    }
                },
                "required": ["origin", "destination", "departure_date"]
            }),
        );
        self.tools.insert("search_flights".to_string(), schema);
    }

    fn register_get_weather(&mut self) {
        let schema = ToolSchema::new(
            "get_weather",
            "Get current weather and a short forecast for a location",
            json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "City or region"
                    },
                    "days": {
                        "type": "integer",
                        "description": "Forecast length in days",
                        "default": 3,
                        "minimum": 0,
                        "maximum": 5
                    }
                },
                "required": ["location"]
            }),
        );
        self.tools.insert("get_weather".to_string(), schema);
    }

    fn register_convert_currency(&mut self) {
        let schema = ToolSchema::new(
            "convert_currency",
            "Convert an amount between currencies",
            json!({
                "type": "object",
                "properties": {
                    "amount": {
                        "type": "number",
                        "description": "Amount in the source currency"
                    },
                    "from_currency": {
                        "type": "string",
                        "description": "ISO code, e.g. USD"
                    },
                    "to_currency": {
                        "type": "string",
                        "description": "ISO code, e.g. EUR"
                    }
                },
                "required": ["amount", "from_currency", "to_currency"]
            }),
        );
        self.tools.insert("convert_currency".to_string(), schema);
    }

    /// Get tool schema by name
    pub fn get(&self, name: &str) -> Option<&ToolSchema> {
        self.tools.get(name)
    }

    /// Check if tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get all tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all tool schemas
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        self.tools.values().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_registered() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.tool_names(),
            vec!["convert_currency", "get_weather", "search_flights"]
        );
    }

    #[test]
    fn test_required_parameters() {
        let registry = ToolRegistry::new();
        assert_eq!(
            registry.get("search_flights").unwrap().required(),
            vec!["origin", "destination", "departure_date"]
        );
        assert_eq!(registry.get("get_weather").unwrap().required(), vec!["location"]);
    }

    #[test]
    fn test_schemas_described() {
        for schema in ToolRegistry::new().schemas() {
            assert!(!schema.name.is_empty());
            assert!(!schema.description.is_empty());
            assert_eq!(schema.parameters["type"], "object");
        }
    }

    #[test]
    fn test_nonexistent_tool() {
        let registry = ToolRegistry::new();
        assert!(!registry.contains("book_hotel"));
        assert!(registry.get("book_hotel").is_none());
    }
}
