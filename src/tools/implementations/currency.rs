//! Mock currency conversion (USD-based rates)
use serde::{Deserialize, Serialize};

/// Units of each currency per 1 USD
const USD_RATES: [(&str, f64); 8] = [
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.75),
    ("JPY", 110.0),
    ("CAD", 1.25),
    ("AUD", 1.35),
    ("CHF", 0.92),
    ("CNY", 6.45),
];

/// Result of a conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyConversion {
    pub original_amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    pub exchange_rate: f64,
    pub converted_amount: f64,
}

fn usd_rate(code: &str) -> f64 {
    // unknown codes are treated as USD
    USD_RATES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|&(_, rate)| rate)
        .unwrap_or(1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Rate from one currency to another, rounded to 4 decimals
pub fn get_exchange_rate(from_currency: &str, to_currency: &str) -> f64 {
    if from_currency.eq_ignore_ascii_case(to_currency) {
        return 1.0;
    }
    round_to(usd_rate(to_currency) / usd_rate(from_currency), 4)
}

/// Convert an amount; the result is rounded to 2 decimals
pub fn convert_currency(amount: f64, from_currency: &str, to_currency: &str) -> CurrencyConversion {
    let rate = get_exchange_rate(from_currency, to_currency);

    CurrencyConversion {
        original_amount: amount,
        from_currency: from_currency.to_uppercase(),
        to_currency: to_currency.to_uppercase(),
        exchange_rate: rate,
        converted_amount: round_to(amount * rate, 2),
    }
}

/// Human-readable conversion summary
pub fn format_currency_conversion(conversion: &CurrencyConversion) -> String {
    format!(
        "Currency Conversion:\n{} {} = {} {}\nExchange Rate: 1 {} = {} {}",
        conversion.original_amount,
        conversion.from_currency,
        conversion.converted_amount,
        conversion.to_currency,
        conversion.from_currency,
        conversion.exchange_rate,
        conversion.to_currency
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_currency() {
        assert_eq!(get_exchange_rate("EUR", "EUR"), 1.0);
    }

    #[test]
    fn test_cross_rate_through_usd() {
        // 110 / 0.85
        assert_eq!(get_exchange_rate("EUR", "JPY"), 129.4118);
        assert_eq!(get_exchange_rate("USD", "GBP"), 0.75);
    }

    #[test]
    fn test_unknown_currency_treated_as_usd() {
        assert_eq!(get_exchange_rate("XYZ", "EUR"), 0.85);
    }

    #[test]
    fn test_convert_rounds_amount() {
        let conversion = convert_currency(100.0, "usd", "jpy");
        assert_eq!(conversion.from_currency, "USD");
        assert_eq!(conversion.to_currency, "JPY");
        assert_eq!(conversion.converted_amount, 11000.0);

        let conversion = convert_currency(10.0, "EUR", "JPY");
        assert_eq!(conversion.converted_amount, 1294.12);
    }

    #[test]
    fn test_format() {
        let text = format_currency_conversion(&convert_currency(100.0, "USD", "EUR"));
        assert_eq!(
            text,
            "Currency Conversion:\n100 USD = 85 EUR\nExchange Rate: 1 USD = 0.85 EUR"
        );
    }
}
