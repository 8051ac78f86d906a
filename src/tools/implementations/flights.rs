//! Mock flight search
//!
//! Prices are in USD. Offers are canned; only the base price depends on the
//! destination.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TravelError};

/// One flight offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub price: f64,
    pub airline: String,
    pub duration: String,
    pub stops: u32,
}

/// (airline, price offset, duration, stops)
const OFFERS: [(&str, f64, &str, u32); 3] = [
    ("Air France", 99.99, "8h 30m", 0),
    ("Lufthansa", 299.99, "10h 15m", 1),
    ("Budget Airways", -100.00, "12h 45m", 2),
];

/// Search flights between two cities on a `YYYY-MM-DD` date
pub fn search_flights(origin: &str, destination: &str, departure_date: &str) -> Result<Vec<FlightInfo>> {
    let date = NaiveDate::parse_from_str(departure_date, "%Y-%m-%d").map_err(|e| {
        TravelError::ToolError {
            tool: "search_flights".to_string(),
            reason: format!("invalid departure_date '{}': {}", departure_date, e),
        }
    })?;

    let base_price = if destination.contains("Tokyo") { 800.0 } else { 600.0 };

    Ok(OFFERS
        .iter()
        .map(|&(airline, offset, duration, stops)| FlightInfo {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: date,
            price: base_price + offset,
            airline: airline.to_string(),
            duration: duration.to_string(),
            stops,
        })
        .collect())
}

/// Human-readable list of offers
pub fn format_flights(flights: &[FlightInfo]) -> String {
    if flights.is_empty() {
        return "No flights found.".to_string();
    }

    flights
        .iter()
        .map(|f| {
            format!(
                "{} -> {} on {}: {} ${:.2} ({}, {} stop{})",
                f.origin,
                f.destination,
                f.departure_date,
                f.airline,
                f.price,
                f.duration,
                f.stops,
                if f.stops == 1 { "" } else { "s" }
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
