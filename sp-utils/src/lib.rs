//! Shared utility functions for Social Pulse crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Local, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Canonicalize a date-like input into "YYYY-MM-DD".
    ///
    /// Accepts a plain calendar date or an RFC 3339 instant; instants are
    /// converted to the local calendar day (not UTC-shifted). `None`, empty,
    /// or unparsable input yields the empty string rather than an error, so
    /// callers can feed picker values straight through.
    pub fn normalize_day(input: Option<&str>) -> String {
        let Some(raw) = input else {
            return String::new();
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return format_date(&date);
        }
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return format_date(&instant.with_timezone(&Local).date_naive());
        }
        String::new()
    }

    /// Bounds for the start-date picker input: `[min, end]`, falling back to
    /// the dataset max when no end is set. Keeps min <= start <= end at the
    /// input level; the normalizer itself never clamps.
    pub fn start_input_bounds(end: &str, min_date: &str, max_date: &str) -> (String, String) {
        let upper = if end.is_empty() { max_date } else { end };
        (min_date.to_string(), upper.to_string())
    }

    /// Bounds for the end-date picker input: `[start, max]`, falling back to
    /// the dataset min when no start is set.
    pub fn end_input_bounds(start: &str, min_date: &str, max_date: &str) -> (String, String) {
        let lower = if start.is_empty() { min_date } else { start };
        (lower.to_string(), max_date.to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2024-01-05");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_normalize_day_plain_date() {
            assert_eq!(normalize_day(Some("2024-01-05")), "2024-01-05");
            assert_eq!(normalize_day(Some("  2024-01-05  ")), "2024-01-05");
        }

        #[test]
        fn test_normalize_day_missing_or_garbage() {
            assert_eq!(normalize_day(None), "");
            assert_eq!(normalize_day(Some("")), "");
            assert_eq!(normalize_day(Some("not-a-date")), "");
            assert_eq!(normalize_day(Some("2024-13-45")), "");
        }

        #[test]
        fn test_normalize_day_rfc3339_uses_local_calendar() {
            let input = "2024-06-15T12:00:00+00:00";
            let expected = DateTime::parse_from_rfc3339(input)
                .unwrap()
                .with_timezone(&Local)
                .date_naive();
            assert_eq!(normalize_day(Some(input)), format_date(&expected));
        }

        #[test]
        fn test_start_bounds_follow_end() {
            let (lo, hi) = start_input_bounds("", "2024-01-01", "2024-12-31");
            assert_eq!(lo, "2024-01-01");
            assert_eq!(hi, "2024-12-31");

            let (lo, hi) = start_input_bounds("2024-06-30", "2024-01-01", "2024-12-31");
            assert_eq!(lo, "2024-01-01");
            assert_eq!(hi, "2024-06-30");
        }

        #[test]
        fn test_end_bounds_follow_start() {
            let (lo, hi) = end_input_bounds("", "2024-01-01", "2024-12-31");
            assert_eq!(lo, "2024-01-01");
            assert_eq!(hi, "2024-12-31");

            let (lo, hi) = end_input_bounds("2024-03-01", "2024-01-01", "2024-12-31");
            assert_eq!(lo, "2024-03-01");
            assert_eq!(hi, "2024-12-31");
        }
    }
}

/// Free-text helpers for display shaping
pub mod text {
    /// Strip any run of leading/trailing double quotes, then trim whitespace.
    /// `None` or empty input yields the empty string.
    pub fn clean_quotes(raw: Option<&str>) -> String {
        match raw {
            Some(s) => s.trim_matches('"').trim().to_string(),
            None => String::new(),
        }
    }

    /// Truncate to at most `limit` characters, appending an ellipsis marker
    /// when anything was cut. A plain character slice: not word-boundary
    /// aware, but always safe on multi-byte text.
    pub fn truncate_chars(text: &str, limit: usize) -> String {
        if text.chars().count() <= limit {
            text.to_string()
        } else {
            let mut out: String = text.chars().take(limit).collect();
            out.push_str("...");
            out
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_clean_quotes_strips_wrapping_quotes() {
            assert_eq!(clean_quotes(Some("\"Pricing Concerns\"")), "Pricing Concerns");
            assert_eq!(clean_quotes(Some("\"\"\"Doubled\"\"\"")), "Doubled");
        }

        #[test]
        fn test_clean_quotes_trims_whitespace() {
            assert_eq!(clean_quotes(Some("\"  Padded Name  \"")), "Padded Name");
            assert_eq!(clean_quotes(Some("   plain   ")), "plain");
        }

        #[test]
        fn test_clean_quotes_missing_input() {
            assert_eq!(clean_quotes(None), "");
            assert_eq!(clean_quotes(Some("")), "");
            assert_eq!(clean_quotes(Some("\"\"")), "");
        }

        #[test]
        fn test_clean_quotes_keeps_inner_quotes() {
            assert_eq!(clean_quotes(Some("\"say \"hi\" now\"")), "say \"hi\" now");
        }

        #[test]
        fn test_truncate_at_exact_limit() {
            let exactly_300: String = "x".repeat(300);
            assert_eq!(truncate_chars(&exactly_300, 300), exactly_300);

            let over: String = "x".repeat(305);
            let truncated = truncate_chars(&over, 300);
            assert_eq!(truncated.chars().count(), 303);
            assert!(truncated.ends_with("..."));
            assert_eq!(&truncated[..300], &over[..300]);
        }

        #[test]
        fn test_truncate_short_text_unchanged() {
            assert_eq!(truncate_chars("short", 300), "short");
            assert_eq!(truncate_chars("", 300), "");
        }

        #[test]
        fn test_truncate_multibyte_safe() {
            let text = "é".repeat(10);
            let truncated = truncate_chars(&text, 4);
            assert_eq!(truncated, format!("{}...", "é".repeat(4)));
        }
    }
}
