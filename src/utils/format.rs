use chrono::DateTime;

/// Monetary display, fixed at two decimals.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Renders an RFC 3339 timestamp as DD.MM.YYYY; anything the backend sends
/// that does not parse passes through unchanged.
pub fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_is_fixed_at_two_decimals() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(format_price(99.999), "100.00");
    }

    #[test]
    fn date_renders_day_month_year() {
        assert_eq!(format_date("2026-08-07T10:30:00+00:00"), "07.08.2026");
        assert_eq!(format_date("2025-12-31T23:59:59Z"), "31.12.2025");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date(""), "");
    }
}
