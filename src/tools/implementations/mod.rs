//! Tool implementations

pub mod currency;
pub mod flights;
pub mod weather;

pub use currency::{convert_currency, format_currency_conversion, get_exchange_rate, CurrencyConversion};
pub use flights::{format_flights, search_flights, FlightInfo};
pub use weather::{format_weather, get_weather_info, ForecastDay, WeatherInfo};
