//! Mock weather service
use serde::{Deserialize, Serialize};

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub rain_chance: u8,
}

/// Current conditions plus a short forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub location: String,
    pub temperature: f64,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: f64,
    pub forecast_days: Vec<ForecastDay>,
}

/// Longest forecast the mock can serve
pub const MAX_FORECAST_DAYS: usize = 5;

const FORECAST: [(&str, i32, i32, &str, u8); MAX_FORECAST_DAYS] = [
    ("2025-08-24", 22, 15, "Sunny", 10),
    ("2025-08-25", 18, 12, "Cloudy", 30),
    ("2025-08-26", 20, 14, "Light Rain", 70),
    ("2025-08-27", 25, 16, "Partly Cloudy", 20),
    ("2025-08-28", 23, 17, "Sunny", 5),
];

/// Weather for a location; `days` is capped at [`MAX_FORECAST_DAYS`]
pub fn get_weather_info(location: &str, days: usize) -> WeatherInfo {
    let forecast_days = FORECAST
        .iter()
        .take(days)
        .map(|&(date, high, low, condition, rain_chance)| ForecastDay {
            date: date.to_string(),
            high,
            low,
            condition: condition.to_string(),
            rain_chance,
        })
        .collect();

    WeatherInfo {
        location: location.to_string(),
        temperature: 20.5,
        description: "Partly cloudy with occasional showers".to_string(),
        humidity: 65,
        wind_speed: 12.5,
        forecast_days,
    }
}

/// Human-readable weather summary
pub fn format_weather(info: &WeatherInfo) -> String {
    let mut text = format!(
        "Weather in {}: {}°C, {} (humidity {}%, wind {} km/h)",
        info.location, info.temperature, info.description, info.humidity, info.wind_speed
    );
    for day in &info.forecast_days {
        text.push_str(&format!(
            "\n  {}: {} {}°C/{}°C, {}% rain",
            day.date, day.condition, day.high, day.low, day.rain_chance
        ));
    }
    text
}
