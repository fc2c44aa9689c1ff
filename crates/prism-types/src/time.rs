use chrono::{NaiveDate, NaiveDateTime};

/// Render a stored SQLite timestamp as ISO-8601.
///
/// SQLite's `datetime('now')` produces `YYYY-MM-DD HH:MM:SS`; the API
/// contract wants `YYYY-MM-DDTHH:MM:SS`. Date-only values (used for
/// release dates) are already ISO-8601 and pass through, as does anything
/// that was stored with a `T` separator in the first place.
pub fn to_iso8601(stored: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(stored, "%Y-%m-%d %H:%M:%S%.f") {
        return dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    }
    if NaiveDate::parse_from_str(stored, "%Y-%m-%d").is_ok() {
        return stored.to_string();
    }
    stored.to_string()
}

/// Nullable column variant: `NULL` stays `null` in the response.
pub fn opt_iso8601(stored: Option<&str>) -> Option<String> {
    stored.map(to_iso8601)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_gets_t_separator() {
        assert_eq!(to_iso8601("2024-03-15 10:30:00"), "2024-03-15T10:30:00");
    }

    #[test]
    fn fractional_seconds_are_dropped() {
        assert_eq!(to_iso8601("2024-03-15 10:30:00.123"), "2024-03-15T10:30:00");
    }

    #[test]
    fn date_only_passes_through() {
        assert_eq!(to_iso8601("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn null_stays_null() {
        assert_eq!(opt_iso8601(None), None);
        assert_eq!(
            opt_iso8601(Some("2024-03-15 10:30:00")),
            Some("2024-03-15T10:30:00".to_string())
        );
    }
}
