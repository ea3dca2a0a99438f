//! View-side formatting helpers. The core hands the shell plain numbers;
//! everything about how they look happens here.

use chrono::{DateTime, Local};

use crate::config::Config;

/// Maps an ISO 4217 code to its display symbol, falling back to the code.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "JPY" => "¥",
        other => other,
    }
}

/// Renders an amount with two decimals and the configured currency symbol,
/// e.g. `1300.00 €`.
pub fn format_amount(value: f64, config: &Config) -> String {
    format!("{:.2} {}", value, currency_symbol(&config.currency))
}

/// Renders a timestamp for the shell banner, e.g. `06/08/2026, 14:05`.
pub fn format_banner_date(moment: DateTime<Local>) -> String {
    moment.format("%d/%m/%Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn known_codes_map_to_symbols() {
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("CHF"), "CHF");
    }

    #[test]
    fn amounts_render_with_two_decimals() {
        let config = Config::default();
        assert_eq!(format_amount(1300.0, &config), "1300.00 €");
        assert_eq!(format_amount(-650.5, &config), "-650.50 €");
    }

    #[test]
    fn amounts_follow_the_configured_currency() {
        let config = Config {
            currency: "USD".into(),
            ..Config::default()
        };
        assert_eq!(format_amount(90.0, &config), "90.00 $");
    }

    #[test]
    fn banner_date_uses_day_month_year() {
        let moment = Local.with_ymd_and_hms(2026, 8, 6, 14, 5, 0).unwrap();
        assert_eq!(format_banner_date(moment), "06/08/2026, 14:05");
    }
}
